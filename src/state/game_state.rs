//! The game state value.
//!
//! ## Invariants
//!
//! - The zone key set always equals `registry::zone_keys()`: every zone
//!   exists from the start, possibly empty, and is never removed.
//! - Every id in a zone list has exactly one entry in `cards_by_id`, and
//!   every card appears in exactly one zone list exactly once.
//!
//! Both are checked by `check_integrity`. State is built from `im` persistent
//! collections, so clones are O(1) snapshots and readers cannot disturb the
//! store's copy.

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{Card, CardId};
use crate::registry::{zone_keys, ZoneKey};

/// A violated state invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("zone {0} is missing")]
    MissingZone(ZoneKey),

    #[error("zone {0} is not a registered zone")]
    UnexpectedZone(ZoneKey),

    #[error("zone {zone} holds {id}, which has no card entry")]
    UnknownCard { zone: ZoneKey, id: CardId },

    #[error("card {0} is placed more than once")]
    DuplicatePlacement(CardId),

    #[error("card {0} is not in any zone")]
    OrphanCard(CardId),
}

/// Zones, cards, and the loaded deck's name.
///
/// Deserialization runs `check_integrity`, so a decoded state holds both
/// invariants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateFields", rename_all = "camelCase")]
pub struct GameState {
    deck_name: Option<String>,
    zones: ImHashMap<ZoneKey, Vector<CardId>>,
    cards_by_id: ImHashMap<CardId, Card>,
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateFields {
    deck_name: Option<String>,
    zones: ImHashMap<ZoneKey, Vector<CardId>>,
    cards_by_id: ImHashMap<CardId, Card>,
}

impl TryFrom<GameStateFields> for GameState {
    type Error = IntegrityError;

    fn try_from(fields: GameStateFields) -> Result<Self, Self::Error> {
        let state = Self {
            deck_name: fields.deck_name,
            zones: fields.zones,
            cards_by_id: fields.cards_by_id,
        };
        state.check_integrity()?;
        Ok(state)
    }
}

impl GameState {
    /// Initial state: every registered zone empty, no deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck_name: None,
            zones: zone_keys().into_iter().map(|key| (key, Vector::new())).collect(),
            cards_by_id: ImHashMap::new(),
        }
    }

    #[must_use]
    pub fn deck_name(&self) -> Option<&str> {
        self.deck_name.as_deref()
    }

    /// Ids in `zone`, in stack order. `None` for an unregistered zone.
    #[must_use]
    pub fn zone(&self, zone: ZoneKey) -> Option<&Vector<CardId>> {
        self.zones.get(&zone)
    }

    /// All zone keys, in no particular order.
    pub fn zone_keys(&self) -> impl Iterator<Item = ZoneKey> + '_ {
        self.zones.keys().copied()
    }

    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards_by_id.get(id)
    }

    /// All cards, in no particular order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards_by_id.values()
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards_by_id.len()
    }

    pub(crate) fn set_deck_name(&mut self, deck_name: String) {
        self.deck_name = Some(deck_name);
    }

    /// Register `card` and append its id to `zone`.
    pub(crate) fn place_card(&mut self, zone: ZoneKey, card: Card) {
        self.zones
            .entry(zone)
            .or_insert_with(Vector::new)
            .push_back(card.id.clone());
        self.cards_by_id.insert(card.id.clone(), card);
    }

    /// Verify the zone key set and the zone/card correspondence.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let registered: FxHashSet<ZoneKey> = zone_keys().into_iter().collect();

        if let Some(&missing) = registered.iter().find(|key| !self.zones.contains_key(*key)) {
            return Err(IntegrityError::MissingZone(missing));
        }
        if let Some(unexpected) = self.zone_keys().find(|key| !registered.contains(key)) {
            return Err(IntegrityError::UnexpectedZone(unexpected));
        }

        let mut placed = FxHashSet::default();
        for (&zone, ids) in &self.zones {
            for id in ids {
                if !self.cards_by_id.contains_key(id) {
                    return Err(IntegrityError::UnknownCard { zone, id: id.clone() });
                }
                if !placed.insert(id) {
                    return Err(IntegrityError::DuplicatePlacement(id.clone()));
                }
            }
        }

        if let Some(orphan) = self.cards_by_id.keys().find(|id| !placed.contains(id)) {
            return Err(IntegrityError::OrphanCard(orphan.clone()));
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
