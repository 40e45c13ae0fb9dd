//! # rust-board
//!
//! Geometry and state core for a responsive card-game board.
//!
//! ## Design Principles
//!
//! 1. **Deferred Lengths**: Geometry produces `Length` expressions (`%`, `vh`,
//!    `px`) rather than pixels, so one layout stays valid as the container
//!    resizes. Eager resolution is available through `Rect::resolve`.
//!
//! 2. **Table-Driven Registries**: Zones, buttons, and labels are plain layout
//!    tables. Content comes from exhaustive `KindMap` renderer tables, never
//!    from per-kind branching.
//!
//! 3. **Single Writer**: `GameState` changes only through `reduce`. State uses
//!    `im` persistent collections, so snapshots are O(1) and readers cannot
//!    disturb the store.
//!
//! ## Modules
//!
//! - `geometry`: Grid, card sizes, rectangles from anchors, lane offsets
//! - `registry`: Zone/button/label tables, renderer maps, button actions
//! - `layout`: Whole-board placement for a `BoardConfig`
//! - `deck`: Lenient and strict deck file parsers
//! - `state`: Cards, game state, reducer, selectors, store
//! - `config`: Board geometry configuration
//!
//! ## Example
//!
//! ```
//! use rust_board::{parse_deck_json, BoardConfig, BoardLayout, GameStore, ZoneKey, ZoneKind};
//!
//! let board = BoardLayout::compute(&BoardConfig::default());
//! assert_eq!(board.zones.len(), 12);
//!
//! let mut store = GameStore::with_seed(42);
//! let deck = parse_deck_json(r#"[{"name":"Starter","cards":{"A001":"4","A002":"2"}}]"#).unwrap();
//! store.dispatch(deck.into());
//!
//! let deck_zone = store.state().zone(ZoneKey::single(ZoneKind::Deck)).unwrap();
//! assert_eq!(deck_zone.len(), 6);
//! ```

pub mod config;
pub mod deck;
pub mod geometry;
pub mod layout;
pub mod registry;
pub mod state;

// Re-export commonly used types
pub use crate::config::{BoardConfig, ConfigError};

pub use crate::geometry::{
    button_rect, compute_span, label_rect, zone_rect, CardMetrics, CardSize, Grid, GridMetrics, GridPoint, GridSpec,
    Lane, Length, LengthContext, Orientation, Rect, ResolvedRect, Viewport,
};

pub use crate::registry::{
    create_buttons, standard_button_definitions, standard_label_layouts, standard_zone_layouts, validate_layouts,
    zone_keys, ButtonActionDeps, ButtonKey, ButtonOutcome, FrameVariant, KindMap, LabelKey, TextFileSource, ZoneKey,
    ZoneKind, ZoneLayout, ZoneSlot,
};

pub use crate::layout::BoardLayout;

pub use crate::deck::{
    parse_deck_from_json_text, parse_deck_json, DeckCardInstance, DeckCounts, DeckParseError, DeckValidationError,
    ImportedDeck,
};

pub use crate::state::{
    card_ids_in_zone, cards_in_zone, reduce, Card, CardId, CardIdGenerator, GameAction, GameState, GameStore,
    ImportError,
};
