//! The single writer path for `GameState`.

use tracing::{debug, warn};

use super::action::GameAction;
use super::card::Card;
use super::game_state::GameState;
use super::ids::CardIdGenerator;
use crate::deck::ImportedDeck;
use crate::registry::{ZoneKey, ZoneKind};

/// Decks larger than this still import, with a `warn` event.
pub const LARGE_IMPORT_TOTAL: u64 = 10_000;

/// Apply `action` to `state`, returning the next state.
///
/// `ImportDeck` resets everything and lays the new deck into the deck zone,
/// one fresh card per copy, in file order. `Unknown` returns the state as is.
///
/// ## Example
///
/// ```
/// use rust_board::state::{reduce, CardIdGenerator, GameAction, GameState};
///
/// let mut ids = CardIdGenerator::new(1);
/// let action = GameAction::import_deck("Test", [("A", 2), ("B", 1)].into_iter().collect());
///
/// let state = reduce(&GameState::new(), action, &mut ids);
/// assert_eq!(state.card_count(), 3);
/// assert_eq!(state.deck_name(), Some("Test"));
/// ```
#[must_use]
pub fn reduce(state: &GameState, action: GameAction, ids: &mut CardIdGenerator) -> GameState {
    match action {
        GameAction::ImportDeck { payload } => import_deck(payload, ids),
        GameAction::Unknown => {
            debug!("ignoring unknown action");
            state.clone()
        }
    }
}

fn import_deck(deck: ImportedDeck, ids: &mut CardIdGenerator) -> GameState {
    let deck_zone = ZoneKey::single(ZoneKind::Deck);

    let total = deck.counts_by_card_number.total();
    if is_large_import(total) {
        warn!(deck_name = %deck.deck_name, total, limit = LARGE_IMPORT_TOTAL, "importing an unusually large deck");
    }

    let mut next = GameState::new();
    debug!(deck_name = %deck.deck_name, "state reset for import");
    next.set_deck_name(deck.deck_name);

    for (card_number, count) in deck.counts_by_card_number.iter() {
        for _ in 0..count {
            next.place_card(deck_zone, Card::face_down(ids.next_id(), card_number));
        }
    }

    next
}

fn is_large_import(total: u64) -> bool {
    total > LARGE_IMPORT_TOTAL
}
