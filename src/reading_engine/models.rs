use std::fmt;
use serde::Serialize;

use crate::reading_engine::error::{ReadingError, ReadingResult};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// One entry of the card catalog. Catalogs are static tables, so the text is
/// borrowed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: u32,
    pub name: &'static str,
    pub upright: &'static str,
    pub reversed: &'static str,
}

impl Card {
    /// Meaning that applies for the given orientation.
    pub fn meaning(&self, orientation: Orientation) -> &'static str {
        match orientation {
            Orientation::Upright  => self.upright,
            Orientation::Reversed => self.reversed,
        }
    }

    /// "The Fool" upright, "Reversed The Fool" reversed.
    pub fn display_name(&self, orientation: Orientation) -> String {
        match orientation {
            Orientation::Upright  => self.name.to_string(),
            Orientation::Reversed => format!("Reversed {}", self.name),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Upright  => write!(f, "upright"),
            Orientation::Reversed => write!(f, "reversed"),
        }
    }
}

/// A card id paired with the orientation it came out of the deck in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DrawnCard {
    pub card_id: u32,
    pub orientation: Orientation,
}

impl DrawnCard {
    pub fn new(card_id: u32, orientation: Orientation) -> Self {
        DrawnCard { card_id, orientation }
    }
}

impl fmt::Display for DrawnCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.card_id, self.orientation)
    }
}

// ---------------------------------------------------------------------------
// Spread layouts
// ---------------------------------------------------------------------------

/// What happens once a layout has been resolved.
///
/// New kinds of reading get a new variant here; the dispatcher only ever
/// looks layouts up by key and hands the action to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpreadAction {
    /// Draw one card per position and read each one on its own.
    Positional,
    /// Registered so the name resolves, but there is no reading for it yet.
    NotImplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadLayout {
    pub id: u32,
    pub card_count: u32,
    pub name: &'static str,
    pub positions: &'static [&'static str],
    pub description: &'static str,
    pub action: SpreadAction,
}

impl fmt::Display for SpreadLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.card_count == 1 { "" } else { "s" };
        write!(f, "{} ({} card{})", self.name, self.card_count, plural)
    }
}

// ---------------------------------------------------------------------------
// Reading request / response types
// ---------------------------------------------------------------------------

/// Input to [`draw_reading`](crate::reading_engine::generator::draw_reading).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRequest {
    pub card_count: u32,
    pub spread_name: String,
    /// `Some` makes every random choice reproducible; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    /// `false` leaves the deck in id order (orientations are still random).
    pub shuffle_order: bool,
}

impl ReadingRequest {
    /// Entropy-seeded, shuffled request for `card_count` cards of `spread_name`.
    pub fn new(card_count: u32, spread_name: impl Into<String>) -> Self {
        ReadingRequest {
            card_count,
            spread_name: spread_name.into(),
            rng_seed: None,
            shuffle_order: true,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng_seed(Some(seed))
    }

    /// Set or clear the seed; `None` goes back to entropy.
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn with_shuffle_order(mut self, shuffle_order: bool) -> Self {
        self.shuffle_order = shuffle_order;
        self
    }
}

/// One position of a reading with its card resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingRecord {
    pub position: String,
    pub card: DrawnCard,
    pub display_name: String,
    pub meaning: String,
}

impl fmt::Display for ReadingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {} -> {}", self.position, self.card, self.display_name, self.meaning)
    }
}

/// Closing line printed under every reading until combined readings exist.
pub const COMBINED_READING_PLACEHOLDER: &str = "[combined reading placeholder]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub spread: String,
    pub card_count: u32,
    pub rng_seed: Option<u64>,
    /// In position order.
    pub records: Vec<ReadingRecord>,
}

impl Reading {
    pub fn positions(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.position.as_str()).collect()
    }

    pub fn reversed_count(&self) -> usize {
        self.records.iter().filter(|r| r.card.orientation.is_reversed()).count()
    }

    /// Pretty-printed JSON form of the reading.
    pub fn to_json(&self) -> ReadingResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReadingError::Encoding(e.to_string()))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.spread)?;
        for record in &self.records {
            writeln!(f, " {}", record)?;
        }
        writeln!(f)?;
        write!(f, "{}", COMBINED_READING_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOL: Card = Card {
        id: 0,
        name: "The Fool",
        upright: "New beginnings",
        reversed: "Recklessness",
    };

    #[test]
    fn reversed_card_gets_prefixed_name_and_reversed_meaning() {
        assert_eq!(FOOL.display_name(Orientation::Reversed), "Reversed The Fool");
        assert_eq!(FOOL.meaning(Orientation::Reversed), "Recklessness");
        assert_eq!(FOOL.display_name(Orientation::Upright), "The Fool");
        assert_eq!(FOOL.meaning(Orientation::Upright), "New beginnings");
    }

    #[test]
    fn request_builders() {
        let req = ReadingRequest::new(3, "Past, Present, Future");
        assert_eq!(req.rng_seed, None);
        assert!(req.shuffle_order);

        let req = req.with_seed(7).with_shuffle_order(false);
        assert_eq!(req.rng_seed, Some(7));
        assert!(!req.shuffle_order);

        assert_eq!(req.clone().with_rng_seed(None).rng_seed, None);
        assert_eq!(req.with_rng_seed(Some(9)).rng_seed, Some(9));
    }

    #[test]
    fn card_and_layout_display() {
        assert_eq!(FOOL.to_string(), "The Fool");
        let layout = SpreadLayout {
            id: 0,
            card_count: 1,
            name: "Daily Card",
            positions: &["Daily Card"],
            description: "A single card.",
            action: SpreadAction::Positional,
        };
        assert_eq!(layout.to_string(), "Daily Card (1 card)");
        let layout = SpreadLayout { card_count: 2, name: "You and Them", positions: &["You", "Them"], ..layout };
        assert_eq!(layout.to_string(), "You and Them (2 cards)");
    }

    #[test]
    fn reading_display_ends_with_placeholder() {
        let reading = Reading {
            spread: "Daily Card".into(),
            card_count: 1,
            rng_seed: Some(1),
            records: vec![ReadingRecord {
                position: "Daily Card".into(),
                card: DrawnCard::new(0, Orientation::Reversed),
                display_name: FOOL.display_name(Orientation::Reversed),
                meaning: FOOL.reversed.into(),
            }],
        };
        let text = reading.to_string();
        assert!(text.contains(" Daily Card: (0, reversed) -> Reversed The Fool -> Recklessness"));
        assert!(text.ends_with(COMBINED_READING_PLACEHOLDER));

        let json: serde_json::Value = serde_json::from_str(&reading.to_json().unwrap()).unwrap();
        assert_eq!(json["records"][0]["display_name"], "Reversed The Fool");
        assert_eq!(json["records"][0]["card"]["orientation"], "Reversed");
    }
}
