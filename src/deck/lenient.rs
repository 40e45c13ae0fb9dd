//! Lenient deck parser used by the import button.
//!
//! Only the first deck in the file is read. Count values are coerced to
//! numbers the way loosely typed deck exporters write them (`"4"`, `4`,
//! `"4.0"`, `" 4 "`); anything that does not come out as a finite positive
//! number is skipped rather than rejected.

use serde_json::Value;
use tracing::debug;

use super::counts::{DeckCounts, ImportedDeck};
use super::error::DeckParseError;

/// Parse a deck file into a deck name and per-card counts.
///
/// Fails when the text is not JSON, the root is not a non-empty array, or the
/// first entry lacks a string `name` or an object `cards`. Individual counts
/// that are not finite and positive are dropped; the rest are floored.
///
/// ## Example
///
/// ```
/// use rust_board::deck::parse_deck_json;
///
/// let deck = parse_deck_json(r#"[{"name":"Test","cards":{"A001":"4","A002":"0","A003":"x"}}]"#).unwrap();
///
/// assert_eq!(deck.deck_name, "Test");
/// assert_eq!(deck.counts_by_card_number.get("A001"), Some(4));
/// assert_eq!(deck.counts_by_card_number.len(), 1);
/// ```
pub fn parse_deck_json(text: &str) -> Result<ImportedDeck, DeckParseError> {
    let root: Value = serde_json::from_str(text)?;

    let first = root
        .as_array()
        .and_then(|decks| decks.first())
        .ok_or(DeckParseError::EmptyDeck)?;

    let deck_name = first
        .get("name")
        .and_then(Value::as_str)
        .ok_or(DeckParseError::MissingName)?;

    let cards = first
        .get("cards")
        .and_then(Value::as_object)
        .ok_or(DeckParseError::MissingCards)?;

    let mut counts = DeckCounts::new();
    for (card_number, raw) in cards {
        match coerce_count(raw) {
            Some(count) => counts.insert(card_number.as_str(), count),
            None => debug!(%card_number, value = %raw, "skipping unusable count"),
        }
    }

    Ok(ImportedDeck::new(deck_name, counts))
}

/// Finite, positive, floored count; `None` for anything else.
///
/// Values above `u32::MAX` saturate.
fn coerce_count(raw: &Value) -> Option<u32> {
    let number = to_number(raw)?;
    if !number.is_finite() || number <= 0.0 {
        return None;
    }
    Some(number.floor() as u32)
}

/// Numeric value of a JSON value under loose string-to-number rules.
fn to_number(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => string_to_number(s),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(items) => array_to_number(items),
        Value::Object(_) => None,
    }
}

/// An array reads as its comma-joined text: `[]` and `[null]` are zero, a
/// single number or numeric string is that number, anything longer is not
/// a number.
fn array_to_number(items: &[Value]) -> Option<f64> {
    match items {
        [] | [Value::Null] => Some(0.0),
        [Value::Number(n)] => n.as_f64(),
        [Value::String(s)] => string_to_number(s),
        [Value::Array(inner)] => array_to_number(inner),
        _ => None,
    }
}

/// Parse a trimmed decimal, exponent, or `0x`/`0o`/`0b` string.
///
/// The empty string is zero. Words such as `inf` or `NaN` are not numbers.
fn string_to_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }

    match s.trim_start_matches(['+', '-']) {
        "Infinity" => return Some(if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY }),
        _ if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) => return None,
        _ => {}
    }

    s.parse().ok()
}
