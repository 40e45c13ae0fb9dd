//! `GameStore`: owner of the current state and the id generator.
//!
//! All writes go through `dispatch` (and so through `reduce`). Readers get a
//! shared reference or an O(1) snapshot.
//!
//! ## Imports
//!
//! The store hands out one `ImportTicket` at a time. A second `begin_import`
//! fails until the first ticket is finished or cancelled:
//!
//! ```
//! use rust_board::state::{GameStore, ImportError};
//!
//! let mut store = GameStore::with_seed(1);
//! let ticket = store.begin_import().unwrap();
//! assert_eq!(store.begin_import().unwrap_err(), ImportError::AlreadyPending);
//!
//! store.cancel_import(ticket);
//! assert!(store.begin_import().is_ok());
//! ```

use thiserror::Error;
use tracing::{debug, info};

use super::action::GameAction;
use super::game_state::GameState;
use super::ids::CardIdGenerator;
use super::reducer::reduce;
use super::selectors;
use crate::deck::ImportedDeck;

/// Why an import could not start or finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("another deck import is already in progress")]
    AlreadyPending,

    #[error("import ticket {0} is no longer current")]
    StaleTicket(u64),
}

/// Permission to complete one import. Obtained from `GameStore::begin_import`.
#[must_use = "an unused ticket blocks further imports; finish or cancel it"]
#[derive(Debug, PartialEq, Eq)]
pub struct ImportTicket(u64);

impl ImportTicket {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Single-writer container for `GameState`.
#[derive(Clone, Debug)]
pub struct GameStore {
    state: GameState,
    ids: CardIdGenerator,
    pending_import: Option<u64>,
    next_ticket: u64,
}

impl GameStore {
    /// Store with ids seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(CardIdGenerator::from_entropy())
    }

    /// Store with a fixed id seed, for reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_ids(CardIdGenerator::new(seed))
    }

    #[must_use]
    pub fn with_ids(ids: CardIdGenerator) -> Self {
        Self {
            state: GameState::new(),
            ids,
            pending_import: None,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// O(1) copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Number of cards in the deck zone.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        selectors::deck_count(&self.state)
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: GameAction) {
        self.state = reduce(&self.state, action, &mut self.ids);
    }

    /// Whether an import ticket is outstanding.
    #[must_use]
    pub fn import_pending(&self) -> bool {
        self.pending_import.is_some()
    }

    /// Reserve the import slot.
    pub fn begin_import(&mut self) -> Result<ImportTicket, ImportError> {
        if self.pending_import.is_some() {
            return Err(ImportError::AlreadyPending);
        }

        self.next_ticket += 1;
        self.pending_import = Some(self.next_ticket);
        debug!(ticket = self.next_ticket, "import started");
        Ok(ImportTicket(self.next_ticket))
    }

    /// Import `deck` and release the slot.
    pub fn finish_import(&mut self, ticket: ImportTicket, deck: ImportedDeck) -> Result<(), ImportError> {
        self.release(&ticket)?;

        let total = deck.counts_by_card_number.total();
        self.dispatch(GameAction::from(deck));
        info!(ticket = ticket.0, total, "deck imported");
        Ok(())
    }

    /// Release the slot without touching state. A stale ticket is ignored.
    pub fn cancel_import(&mut self, ticket: ImportTicket) {
        if self.release(&ticket).is_ok() {
            debug!(ticket = ticket.0, "import cancelled");
        }
    }

    fn release(&mut self, ticket: &ImportTicket) -> Result<(), ImportError> {
        if self.pending_import != Some(ticket.0) {
            return Err(ImportError::StaleTicket(ticket.0));
        }
        self.pending_import = None;
        Ok(())
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
