//! Game state core.
//!
//! ## Key Types
//!
//! - `GameState`: Zones (ordered card ids) and cards by id
//! - `GameAction`: Transition requests, applied by `reduce`
//! - `GameStore`: Owns the state, the id generator, and the import slot
//! - `CardIdGenerator`: Session-unique card ids
//!
//! ## Data Flow
//!
//! ```text
//! deck file ──parse──▶ ImportedDeck ──GameAction::ImportDeck──▶ reduce ──▶ GameState
//!                                                                   │
//!                                           selectors ◀─────────────┘
//! ```

pub mod action;
pub mod card;
pub mod game_state;
pub mod ids;
pub mod reducer;
pub mod selectors;
pub mod store;

pub use action::GameAction;
pub use card::{Card, CardId};
pub use game_state::{GameState, IntegrityError};
pub use ids::CardIdGenerator;
pub use reducer::{reduce, LARGE_IMPORT_TOTAL};
pub use selectors::{card_ids_in_zone, cards_in_zone, deck_count};
pub use store::{GameStore, ImportError, ImportTicket};
