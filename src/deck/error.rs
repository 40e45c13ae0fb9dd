//! Deck import errors.

use thiserror::Error;

/// Failure of the lenient parser (`parse_deck_json`).
#[derive(Debug, Error)]
pub enum DeckParseError {
    #[error("deck file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("deck file must be a non-empty array")]
    EmptyDeck,

    #[error("deck entry has no string `name`")]
    MissingName,

    #[error("deck entry has no `cards` object")]
    MissingCards,
}

/// Failure of the strict parser (`parse_deck_from_json_text`).
#[derive(Debug, Error)]
pub enum DeckValidationError {
    #[error("deck file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("deck file root must be an array")]
    RootNotArray,

    #[error("deck entry {index} is not an object")]
    EntryNotObject { index: usize },

    #[error("deck entry {index} has no `name`")]
    MissingName { index: usize },

    #[error("deck entry {index} has no `cards`")]
    MissingCards { index: usize },

    #[error("deck entry {index}: `cards` must be an object")]
    CardsNotObject { index: usize },

    #[error("deck entry {index}: cards[{card_id:?}] is {value}, expected one of \"1\"..\"4\"")]
    InvalidCount {
        index: usize,
        card_id: String,
        value: String,
    },
}
