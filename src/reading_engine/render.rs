use crate::reading_engine::{
    catalog::CardCatalog,
    error::{ReadingError, ReadingResult},
    models::{DrawnCard, ReadingRecord},
};

/// Pair each position label with the card drawn for it, in position order.
///
/// Labels and draws must have the same length; a mismatch is a caller bug and
/// is reported as [`ReadingError::PositionMismatch`] rather than truncated.
pub fn render(
    positions: &[&str],
    drawn: &[DrawnCard],
    catalog: &CardCatalog<'_>,
) -> ReadingResult<Vec<ReadingRecord>> {
    if positions.len() != drawn.len() {
        return Err(ReadingError::PositionMismatch {
            positions: positions.len(),
            drawn: drawn.len(),
        });
    }

    positions
        .iter()
        .zip(drawn)
        .map(|(&label, &card)| -> ReadingResult<ReadingRecord> {
            let entry = catalog
                .get(card.card_id)
                .ok_or(ReadingError::DataIntegrity { card_id: card.card_id })?;
            Ok(ReadingRecord {
                position: label.to_string(),
                card,
                display_name: entry.display_name(card.orientation),
                meaning: entry.meaning(card.orientation).to_string(),
            })
        })
        .collect()
}
