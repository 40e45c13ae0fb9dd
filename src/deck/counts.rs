//! Normalized deck contents.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Card number → copy count, in file order.
///
/// Serialized as a JSON object. Order matters: the reducer lays cards into
/// the deck zone in this order.
///
/// ## Example
///
/// ```
/// use rust_board::deck::DeckCounts;
///
/// let mut counts = DeckCounts::new();
/// counts.insert("B002", 1);
/// counts.insert("A001", 4);
/// counts.insert("B002", 2);
///
/// assert_eq!(counts.get("B002"), Some(2));
/// assert_eq!(counts.total(), 6);
/// assert_eq!(serde_json::to_string(&counts).unwrap(), r#"{"B002":2,"A001":4}"#);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckCounts {
    entries: Vec<(String, u32)>,
    /// Card number → position in `entries`.
    positions: FxHashMap<String, usize>,
}

impl DeckCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for `card_number`.
    ///
    /// A repeated card number keeps its first position and takes the new count.
    pub fn insert(&mut self, card_number: impl Into<String>, count: u32) {
        let card_number = card_number.into();
        match self.positions.get(&card_number) {
            Some(&i) => self.entries[i].1 = count,
            None => {
                self.positions.insert(card_number.clone(), self.entries.len());
                self.entries.push((card_number, count));
            }
        }
    }

    #[must_use]
    pub fn get(&self, card_number: &str) -> Option<u32> {
        self.positions.get(card_number).map(|&i| self.entries[i].1)
    }

    /// Number of distinct card numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(card_number, count)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(number, count)| (number.as_str(), *count))
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| u64::from(count)).sum()
    }
}

impl PartialEq for DeckCounts {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for DeckCounts {}

impl Hash for DeckCounts {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for DeckCounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut counts = DeckCounts::new();
        for (card_number, count) in iter {
            counts.insert(card_number, count);
        }
        counts
    }
}

impl Serialize for DeckCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (card_number, count) in &self.entries {
            map.serialize_entry(card_number, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DeckCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = DeckCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of card numbers to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DeckCounts, A::Error> {
                let mut counts = DeckCounts::new();
                while let Some((card_number, count)) = map.next_entry::<String, u32>()? {
                    counts.insert(card_number, count);
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// A parsed deck file, ready to be imported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedDeck {
    pub deck_name: String,
    pub counts_by_card_number: DeckCounts,
}

impl ImportedDeck {
    #[must_use]
    pub fn new(deck_name: impl Into<String>, counts_by_card_number: DeckCounts) -> Self {
        Self {
            deck_name: deck_name.into(),
            counts_by_card_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let counts: DeckCounts = [("A", 1), ("B", 2), ("A", 3)].into_iter().collect();
        let entries: Vec<_> = counts.iter().collect();

        assert_eq!(entries, vec![("A", 3), ("B", 2)]);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_large_deck_lookup_and_order() {
        let mut counts: DeckCounts = (0..5000u32).map(|i| (format!("C{i:05}"), i % 4 + 1)).collect();
        counts.insert("C00042", 9);

        assert_eq!(counts.len(), 5000);
        assert_eq!(counts.get("C04999"), Some(4));
        assert_eq!(counts.get("C00042"), Some(9));
        assert_eq!(counts.get("missing"), None);
        assert_eq!(counts.iter().nth(42), Some(("C00042", 9)));
        assert_eq!(counts.iter().last().map(|(n, _)| n), Some("C04999"));
    }

    #[test]
    fn test_equality_ignores_index_storage() {
        let a: DeckCounts = [("A", 1), ("B", 2)].into_iter().collect();
        let b: DeckCounts = serde_json::from_str(r#"{"A":1,"B":2}"#).unwrap();
        let reordered: DeckCounts = [("B", 2), ("A", 1)].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, reordered);
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let counts: DeckCounts = serde_json::from_str(r#"{"Z9":1,"A1":2,"M5":3}"#).unwrap();
        let numbers: Vec<_> = counts.iter().map(|(n, _)| n).collect();

        assert_eq!(numbers, vec!["Z9", "A1", "M5"]);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_deserialize_rejects_non_map() {
        assert!(serde_json::from_str::<DeckCounts>("[1, 2]").is_err());
        assert!(serde_json::from_str::<DeckCounts>(r#"{"A":"2"}"#).is_err());
    }

    #[test]
    fn test_imported_deck_field_names() {
        let deck = ImportedDeck::new("Test", [("A001", 4)].into_iter().collect());
        let json = serde_json::to_value(&deck).unwrap();

        assert_eq!(json["deckName"], "Test");
        assert_eq!(json["countsByCardNumber"]["A001"], 4);
    }

    #[test]
    fn test_empty() {
        let counts = DeckCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get("A"), None);
    }
}
