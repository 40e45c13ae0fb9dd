//! Card entities.

use serde::{Deserialize, Serialize};

/// Opaque unique identifier of one card instance.
///
/// Never derived from the card number: a deck may hold several copies of the
/// same card, and each copy gets its own id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One physical card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    /// Printed card number shared by all copies.
    pub card_number: String,
    pub face_up: bool,
    pub tapped: bool,
}

impl Card {
    /// A freshly imported card: face down and untapped.
    #[must_use]
    pub fn face_down(id: CardId, card_number: impl Into<String>) -> Self {
        Self {
            id,
            card_number: card_number.into(),
            face_up: false,
            tapped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_down() {
        let card = Card::face_down(CardId::from("c1"), "A001");
        assert!(!card.face_up);
        assert!(!card.tapped);
        assert_eq!(card.card_number, "A001");
    }

    #[test]
    fn test_serde_shape() {
        let card = Card::face_down(CardId::from("c1"), "A001");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["id"], "c1");
        assert_eq!(json["cardNumber"], "A001");
        assert_eq!(json["faceUp"], false);

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }
}
