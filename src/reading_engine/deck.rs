use rand::{
    seq::{index, SliceRandom},
    Rng,
};
use tracing::debug;

use crate::reading_engine::{
    error::{ReadingError, ReadingResult},
    models::{DrawnCard, Orientation},
};

/// A full deck of drawn cards, one per catalog id, with exactly half
/// (rounded down) of them reversed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<DrawnCard>,
    cursor: usize,
}

impl Deck {
    /// Build a deck over ids `0..catalog_size` and shuffle it with `rng`.
    ///
    /// `floor(catalog_size / 2)` ids are picked without replacement and
    /// reversed, then the whole deck is Fisher-Yates shuffled with the same
    /// generator. With `shuffle_order == false` the deck stays in id order,
    /// which only exists so tests can predict positions.
    pub fn new_shuffled<R: Rng>(
        rng: &mut R,
        catalog_size: usize,
        shuffle_order: bool,
    ) -> ReadingResult<Self> {
        if catalog_size < 1 {
            return Err(ReadingError::InvalidInput(
                "catalog size must be at least 1".into(),
            ));
        }
        let card_count = u32::try_from(catalog_size).map_err(|_| {
            ReadingError::InvalidInput(format!("catalog size {catalog_size} is too large"))
        })?;

        let mut orientation = vec![Orientation::Upright; catalog_size];
        for id in index::sample(rng, catalog_size, catalog_size / 2) {
            orientation[id] = Orientation::Reversed;
        }

        let mut cards: Vec<DrawnCard> = (0..card_count)
            .zip(orientation)
            .map(|(id, o)| DrawnCard::new(id, o))
            .collect();

        if shuffle_order {
            // Fisher-Yates; indices are sampled as u32, so the order does not
            // depend on the target's pointer width.
            cards.shuffle(rng);
        }

        debug!(catalog_size, reversed = catalog_size / 2, shuffle_order, "deck built");
        Ok(Deck { cards, cursor: 0 })
    }

    /// Take the next `n` cards. Fails without moving the cursor if fewer remain.
    pub fn draw(&mut self, n: usize) -> ReadingResult<Vec<DrawnCard>> {
        if n > self.remaining() {
            return Err(ReadingError::InvalidConfiguration(format!(
                "cannot draw {n} cards, only {} left in the deck",
                self.remaining()
            )));
        }
        let drawn = self.cards[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        Ok(drawn)
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// All drawn cards so far.
    pub fn drawn(&self) -> &[DrawnCard] {
        &self.cards[..self.cursor]
    }

    /// The whole deck in dealing order, drawn or not.
    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    pub fn reversed_count(&self) -> usize {
        self.cards.iter().filter(|c| c.orientation.is_reversed()).count()
    }
}
