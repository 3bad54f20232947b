//! Error types for drawing and rendering readings.

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Everything that can stop a reading from being produced.
///
/// There is no partial success: any of these means no [`Reading`] was built.
///
/// [`Reading`]: crate::reading_engine::models::Reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// Request rejected before any routing or randomness (zero card count,
    /// empty spread name, a layout asking for more cards than the deck holds).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Bad argument to the shuffler.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No layout is registered for this card count.
    #[error("no spreads available for {card_count} cards (available counts: {})", join(.available))]
    UnknownCount {
        card_count: u32,
        available: Vec<u32>,
    },

    /// The count is known but none of its layouts matches the name.
    #[error("unknown {card_count}-card spread: {name:?} (known: {})", .known.join(", "))]
    UnknownLayout {
        card_count: u32,
        name: String,
        known: Vec<String>,
    },

    /// The layout is registered but its reading has not been built yet.
    #[error("the {name:?} spread is not implemented yet")]
    NotImplemented { name: String },

    /// A drawn card id is missing from the card catalog.
    #[error("card with id {card_id} not found in the catalog")]
    DataIntegrity { card_id: u32 },

    /// Position labels and drawn cards do not line up one to one.
    #[error("{positions} position labels but {drawn} drawn cards")]
    PositionMismatch { positions: usize, drawn: usize },

    /// A finished reading could not be encoded for output.
    #[error("could not encode reading: {0}")]
    Encoding(String),

    /// Static catalog data failed validation.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

fn join(counts: &[u32]) -> String {
    counts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_count_lists_available_counts() {
        let err = ReadingError::UnknownCount { card_count: 6, available: vec![1, 2, 3] };
        assert_eq!(
            err.to_string(),
            "no spreads available for 6 cards (available counts: 1, 2, 3)"
        );
    }

    #[test]
    fn unknown_layout_lists_known_names() {
        let err = ReadingError::UnknownLayout {
            card_count: 2,
            name: "nope".into(),
            known: vec!["You and Them".into(), "Situation and Advice".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown 2-card spread: \"nope\" (known: You and Them, Situation and Advice)"
        );
    }

    #[test]
    fn encoding_error_carries_the_cause() {
        let err = ReadingError::Encoding("key must be a string".into());
        assert_eq!(err.to_string(), "could not encode reading: key must be a string");
    }
}
