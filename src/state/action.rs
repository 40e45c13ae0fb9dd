//! Actions accepted by the reducer.

use serde::{Deserialize, Serialize};

use crate::deck::{DeckCounts, ImportedDeck};

/// A state transition request.
///
/// Wire form is `{"type": "...", "payload": ...}`. Unknown `type` values
/// deserialize to `Unknown`, which the reducer ignores.
///
/// ```
/// use rust_board::state::GameAction;
///
/// let action: GameAction = serde_json::from_str(
///     r#"{"type":"IMPORT_DECK","payload":{"deckName":"Test","countsByCardNumber":{"A":2}}}"#,
/// ).unwrap();
/// assert!(matches!(action, GameAction::ImportDeck { .. }));
///
/// let other: GameAction = serde_json::from_str(r#"{"type":"DRAW","payload":{"n":1}}"#).unwrap();
/// assert_eq!(other, GameAction::Unknown);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameAction {
    /// Replace the whole state with a freshly expanded deck.
    #[serde(rename = "IMPORT_DECK")]
    ImportDeck { payload: ImportedDeck },

    #[serde(other)]
    Unknown,
}

impl GameAction {
    #[must_use]
    pub fn import_deck(deck_name: impl Into<String>, counts_by_card_number: DeckCounts) -> Self {
        GameAction::ImportDeck {
            payload: ImportedDeck::new(deck_name, counts_by_card_number),
        }
    }
}

impl From<ImportedDeck> for GameAction {
    fn from(payload: ImportedDeck) -> Self {
        GameAction::ImportDeck { payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form() {
        let action = GameAction::import_deck("Test", [("A", 2)].into_iter().collect());
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "IMPORT_DECK");
        assert_eq!(json["payload"]["deckName"], "Test");
        assert_eq!(json["payload"]["countsByCardNumber"]["A"], 2);

        let back: GameAction = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_unknown_type() {
        let action: GameAction = serde_json::from_str(r#"{"type":"SHUFFLE"}"#).unwrap();
        assert_eq!(action, GameAction::Unknown);
    }
}
