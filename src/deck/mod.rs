//! Deck file import.
//!
//! A deck file is a JSON array of decks:
//!
//! ```text
//! [{ "name": "<deck name>", "cards": { "<card number>": "<count>", ... } }]
//! ```
//!
//! Two parsers with different policies live side by side:
//!
//! - `parse_deck_json` (lenient): reads the first deck, skips unusable counts.
//!   Used by the import button.
//! - `parse_deck_from_json_text` (strict): validates every deck, rejects any
//!   count other than `"1"`..`"4"`, and expands to per-copy instances.

pub mod counts;
pub mod error;
pub mod lenient;
pub mod strict;

pub use counts::{DeckCounts, ImportedDeck};
pub use error::{DeckParseError, DeckValidationError};
pub use lenient::parse_deck_json;
pub use strict::{parse_deck_from_json_text, DeckCardInstance, MAX_COPIES};
