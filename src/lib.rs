//! # tarot_spread
//!
//! Draws a hand of tarot cards and reads it against a named spread.
//!
//! ## How it works
//!
//! 1. Build a [`ReadingRequest`] with a card count and a spread name, plus an
//!    optional RNG seed.
//! 2. Call [`draw_reading`]. The spread name is normalized (case, spacing and
//!    punctuation are ignored) and looked up under its card count.
//! 3. A deck covering the whole card catalog is built with exactly half of the
//!    cards (rounded down) reversed, then shuffled. The first `card_count`
//!    cards are the draw.
//! 4. Each position of the spread is paired with its card. Reversed cards read
//!    as "Reversed <name>" with their reversed meaning.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to get the exact same
//!   reading every time, on every platform.
//! - **Closed routing table**: spreads are data in [`SPREADS`]; unknown counts,
//!   unknown names and registered-but-unbuilt spreads are distinct errors.
//!
//! ## Quick start
//!
//! ```rust
//! use tarot_spread::{draw_reading, ReadingRequest};
//!
//! let reading = draw_reading(ReadingRequest::new(3, "Past, Present, Future").with_seed(42))?;
//! assert_eq!(reading.positions(), ["Past", "Present", "Future"]);
//! for record in &reading.records {
//!     println!("{}: {} -> {}", record.position, record.display_name, record.meaning);
//! }
//! # Ok::<(), tarot_spread::ReadingError>(())
//! ```

pub mod reading_engine;

// Convenience re-exports so callers can use `tarot_spread::draw_reading`
// directly without reaching into `reading_engine::`.
pub use reading_engine::{
    draw_reading, normalize, Card, CardCatalog, DrawnCard, Orientation, Reading, ReadingError,
    ReadingRecord, ReadingRequest, ReadingResult, SpreadAction, SpreadLayout, SpreadRegistry,
    TarotReader, MAJOR_ARCANA, SPREADS,
};
