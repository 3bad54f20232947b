use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::reading_engine::{
    catalog::CardCatalog,
    deck::Deck,
    error::{ReadingError, ReadingResult},
    models::{Reading, ReadingRequest, SpreadAction, SpreadLayout},
    render::render,
    spreads::SpreadRegistry,
};

/// Generator owned by a single reading.
///
/// ChaCha8 keeps a seeded reading identical across platforms and rand releases.
pub type ReadingRng = ChaCha8Rng;

/// Fresh generator for one reading: seeded when asked, entropy otherwise.
pub fn reading_rng(seed: Option<u64>) -> ReadingRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None       => ChaCha8Rng::from_entropy(),
    }
}

/// Card catalog plus spread routing table: everything a reading needs besides
/// the generator.
#[derive(Debug, Clone)]
pub struct TarotReader<'a> {
    cards: CardCatalog<'a>,
    spreads: SpreadRegistry,
}

impl TarotReader<'static> {
    /// Reader over the built-in Major Arcana and spread tables.
    pub fn builtin() -> ReadingResult<Self> {
        Ok(TarotReader::new(CardCatalog::major_arcana()?, SpreadRegistry::builtin()?))
    }
}

impl<'a> TarotReader<'a> {
    pub fn new(cards: CardCatalog<'a>, spreads: SpreadRegistry) -> Self {
        TarotReader { cards, spreads }
    }

    pub fn cards(&self) -> &CardCatalog<'a> {
        &self.cards
    }

    pub fn spreads(&self) -> &SpreadRegistry {
        &self.spreads
    }

    /// Resolve the request's spread and run it with a generator built from
    /// the request's seed.
    pub fn draw(&self, request: &ReadingRequest) -> ReadingResult<Reading> {
        // Resolution fails before the generator exists, so bad input consumes no entropy.
        let layout = self.spreads.resolve(request.card_count, &request.spread_name)?;
        let mut rng = reading_rng(request.rng_seed);
        let mut reading = self.read_layout(layout, &mut rng, request.shuffle_order)?;
        reading.rng_seed = request.rng_seed;
        Ok(reading)
    }

    /// Run an already resolved layout with a caller-owned generator.
    pub fn read_layout(
        &self,
        layout: &SpreadLayout,
        rng: &mut ReadingRng,
        shuffle_order: bool,
    ) -> ReadingResult<Reading> {
        match layout.action {
            SpreadAction::Positional => self.positional(layout, rng, shuffle_order),
            SpreadAction::NotImplemented => {
                warn!(spread = layout.name, "spread resolved but not implemented");
                Err(ReadingError::NotImplemented { name: layout.name.to_string() })
            }
        }
    }

    /// Shuffle the full catalog, commit the first `card_count` cards as the
    /// draw, and read them against the layout's positions.
    fn positional(
        &self,
        layout: &SpreadLayout,
        rng: &mut ReadingRng,
        shuffle_order: bool,
    ) -> ReadingResult<Reading> {
        let mut deck = Deck::new_shuffled(rng, self.cards.len(), shuffle_order)?;
        let drawn = deck.draw(layout.card_count as usize)?;
        let records = render(layout.positions, &drawn, &self.cards)?;

        info!(
            spread = layout.name,
            cards = records.len(),
            reversed = records.iter().filter(|r| r.card.orientation.is_reversed()).count(),
            "reading drawn"
        );

        Ok(Reading {
            spread: layout.name.to_string(),
            card_count: layout.card_count,
            rng_seed: None,
            records,
        })
    }
}

/// Core entry point: draw a reading from the built-in tables.
pub fn draw_reading(request: ReadingRequest) -> ReadingResult<Reading> {
    TarotReader::builtin()?.draw(&request)
}
