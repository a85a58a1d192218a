//! # Structural Validation
//!
//! Shape check for card decks that come from outside the app: an imported
//! file or a fetched URL. Both load paths go through [`validate_str`].
//!
//! This is looser than the response parser on purpose. Loaded decks were
//! usually exported by flashgen itself, so only the *presence* of `term` and
//! `definition` is checked, and values are taken verbatim (no trimming, empty
//! strings allowed). Any element with the wrong shape rejects the whole
//! payload.

use crate::error::{FlashError, Result};
use crate::model::Card;
use serde_json::{Map, Value};

/// Parse JSON text and validate it as a deck.
///
/// Malformed JSON is a [`FlashError::Parse`]; well-formed JSON with the wrong
/// shape is a [`FlashError::Validation`].
pub fn validate_str(text: &str) -> Result<Vec<Card>> {
    let value: Value = serde_json::from_str(text).map_err(|e| FlashError::Parse(e.to_string()))?;
    validate(&value)
}

/// Validate an already-parsed JSON value as an ordered list of cards.
pub fn validate(value: &Value) -> Result<Vec<Card>> {
    let items = value.as_array().ok_or_else(|| {
        FlashError::Validation(format!(
            "expected an array of cards, found {}",
            kind_of(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_item(i + 1, item))
        .collect()
}

fn validate_item(position: usize, item: &Value) -> Result<Card> {
    let fields = item.as_object().ok_or_else(|| {
        FlashError::Validation(format!(
            "card {} must be an object, found {}",
            position,
            kind_of(item)
        ))
    })?;

    Ok(Card {
        term: field_text(fields, position, "term")?,
        definition: field_text(fields, position, "definition")?,
    })
}

fn field_text(fields: &Map<String, Value>, position: usize, key: &str) -> Result<String> {
    match fields.get(key) {
        None => Err(FlashError::Validation(format!(
            "card {} is missing \"{}\"",
            position, key
        ))),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v @ (Value::Array(_) | Value::Object(_))) => Err(FlashError::Validation(format!(
            "card {} has {} for \"{}\", expected text",
            position,
            kind_of(v),
            key
        ))),
        // Scalars are shown as their JSON text.
        Some(other) => Ok(other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
