//! Core reading engine: catalogs, deck shuffling, spread dispatch, rendering.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cards, orientations, layouts, request/response structs |
//! | `catalog`   | Static Major Arcana and spread tables, validated card catalog view |
//! | `deck`      | Half-reversed deck with Fisher-Yates shuffle and a draw cursor |
//! | `spreads`   | Name normalization and the `(count, name)` routing table |
//! | `render`    | Pairs position labels with drawn cards and resolves meanings |
//! | `generator` | `TarotReader` and the `draw_reading()` entry point |
//! | `error`     | `ReadingError` and `ReadingResult` |

pub mod catalog;
pub mod deck;
pub mod error;
pub mod generator;
pub mod models;
pub mod render;
pub mod spreads;

// Re-export the public API surface so callers can use
// `reading_engine::draw_reading` without reaching into sub-modules.
pub use catalog::{CardCatalog, MAJOR_ARCANA, SPREADS};
pub use deck::Deck;
pub use error::{ReadingError, ReadingResult};
pub use generator::{draw_reading, reading_rng, ReadingRng, TarotReader};
pub use models::{
    Card, DrawnCard, Orientation, Reading, ReadingRecord, ReadingRequest, SpreadAction,
    SpreadLayout, COMBINED_READING_PLACEHOLDER,
};
pub use render::render;
pub use spreads::{normalize, SpreadRegistry};
