//! Read-only queries over `GameState`.
//!
//! Selectors never fail: an unknown zone reads as empty, and an id with no
//! card entry is skipped.

use im::Vector;

use super::card::{Card, CardId};
use super::game_state::GameState;
use crate::registry::{ZoneKey, ZoneKind};

/// Ids in `zone`, in stack order; empty for an unknown zone.
#[must_use]
pub fn card_ids_in_zone(state: &GameState, zone: ZoneKey) -> Vector<CardId> {
    state.zone(zone).cloned().unwrap_or_default()
}

/// Cards in `zone`, in stack order.
#[must_use]
pub fn cards_in_zone(state: &GameState, zone: ZoneKey) -> Vec<&Card> {
    state
        .zone(zone)
        .map(|ids| ids.iter().filter_map(|id| state.card(id)).collect())
        .unwrap_or_default()
}

/// Number of cards in the deck zone.
#[must_use]
pub fn deck_count(state: &GameState) -> usize {
    state
        .zone(ZoneKey::single(ZoneKind::Deck))
        .map_or(0, Vector::len)
}
