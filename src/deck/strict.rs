//! Strict deck parser.
//!
//! Validates every deck in the file and accepts only the count strings
//! `"1"` to `"4"`. Instead of a count map it produces one entry per physical
//! copy: `{card_id, nth}` with `nth` running from 1 to the count.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::DeckValidationError;

/// The highest copy count a deck may hold of one card.
pub const MAX_COPIES: u8 = 4;

/// One physical copy of a card in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCardInstance {
    pub card_id: String,
    /// 1-based copy index.
    pub nth: u8,
}

fn count_of(value: &Value) -> Option<u8> {
    match value.as_str()? {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "4" => Some(MAX_COPIES),
        _ => None,
    }
}

/// Validate a deck file and expand it into card instances.
///
/// Every array entry must be an object with a `name` and an object `cards`;
/// every count must be exactly one of `"1"`, `"2"`, `"3"`, `"4"`. The first
/// violation is reported with the entry index and card id. An empty array is
/// valid and yields no instances.
///
/// ## Example
///
/// ```
/// use rust_board::deck::parse_deck_from_json_text;
///
/// let cards = parse_deck_from_json_text(r#"[{"name":"Test","cards":{"A":"2","B":"1"}}]"#).unwrap();
/// let ids: Vec<_> = cards.iter().map(|c| (c.card_id.as_str(), c.nth)).collect();
/// assert_eq!(ids, vec![("A", 1), ("A", 2), ("B", 1)]);
///
/// let err = parse_deck_from_json_text(r#"[{"name":"Test","cards":{"X":"5"}}]"#).unwrap_err();
/// assert!(err.to_string().contains("\"X\""));
/// ```
pub fn parse_deck_from_json_text(text: &str) -> Result<Vec<DeckCardInstance>, DeckValidationError> {
    let root: Value = serde_json::from_str(text)?;
    let decks = root.as_array().ok_or(DeckValidationError::RootNotArray)?;

    let mut instances = Vec::new();

    for (index, entry) in decks.iter().enumerate() {
        let entry = entry
            .as_object()
            .ok_or(DeckValidationError::EntryNotObject { index })?;

        if !entry.contains_key("name") {
            return Err(DeckValidationError::MissingName { index });
        }
        let cards = entry
            .get("cards")
            .ok_or(DeckValidationError::MissingCards { index })?
            .as_object()
            .ok_or(DeckValidationError::CardsNotObject { index })?;

        for (card_id, value) in cards {
            let count = count_of(value).ok_or_else(|| DeckValidationError::InvalidCount {
                index,
                card_id: card_id.clone(),
                value: value.to_string(),
            })?;

            instances.extend((1..=count).map(|nth| DeckCardInstance {
                card_id: card_id.clone(),
                nth,
            }));
        }
    }

    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_count() {
        let err = parse_deck_from_json_text(r#"[{"name":"Test","cards":{"X":"5"}}]"#).unwrap_err();

        match err {
            DeckValidationError::InvalidCount { index, card_id, value } => {
                assert_eq!(index, 0);
                assert_eq!(card_id, "X");
                assert_eq!(value, "\"5\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_numeric_and_padded_counts() {
        for cards in [r#"{"A":4}"#, r#"{"A":" 4"}"#, r#"{"A":"4.0"}"#, r#"{"A":"0"}"#] {
            let text = format!(r#"[{{"name":"T","cards":{cards}}}]"#);
            assert!(
                matches!(
                    parse_deck_from_json_text(&text),
                    Err(DeckValidationError::InvalidCount { .. })
                ),
                "{cards}"
            );
        }
    }

    #[test]
    fn test_validates_every_entry() {
        let text = r#"[{"name":"A","cards":{"X":"1"}},{"name":"B","cards":[]}]"#;
        assert!(matches!(
            parse_deck_from_json_text(text),
            Err(DeckValidationError::CardsNotObject { index: 1 })
        ));

        let text = r#"[{"name":"A","cards":{}}, 3]"#;
        assert!(matches!(
            parse_deck_from_json_text(text),
            Err(DeckValidationError::EntryNotObject { index: 1 })
        ));
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            parse_deck_from_json_text(r#"[{"cards":{}}]"#),
            Err(DeckValidationError::MissingName { index: 0 })
        ));
        assert!(matches!(
            parse_deck_from_json_text(r#"[{"name":"A"}]"#),
            Err(DeckValidationError::MissingCards { index: 0 })
        ));
        assert!(matches!(
            parse_deck_from_json_text(r#"[{"name":"A","cards":null}]"#),
            Err(DeckValidationError::CardsNotObject { index: 0 })
        ));
    }

    #[test]
    fn test_root_shape() {
        assert!(matches!(
            parse_deck_from_json_text("{}"),
            Err(DeckValidationError::RootNotArray)
        ));
        assert!(matches!(
            parse_deck_from_json_text("[oops"),
            Err(DeckValidationError::InvalidJson(_))
        ));
        assert!(parse_deck_from_json_text("[]").unwrap().is_empty());
    }

    #[test]
    fn test_expands_all_entries_in_order() {
        let text = r#"[{"name":"A","cards":{"P":"1","Q":"3"}},{"name":"B","cards":{"R":"2"}}]"#;
        let cards = parse_deck_from_json_text(text).unwrap();

        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0], DeckCardInstance { card_id: "P".to_string(), nth: 1 });
        assert_eq!(cards[3], DeckCardInstance { card_id: "Q".to_string(), nth: 3 });
        assert_eq!(cards[5], DeckCardInstance { card_id: "R".to_string(), nth: 2 });
    }
}
