//! # Response Parser
//!
//! Turns the free-form text returned by the model into cards. Each line is
//! expected to look like `term: definition`; anything else is dropped without
//! complaint.
//!
//! Only the first `:` separates term from definition. Later delimiters stay
//! in the definition, which keeps times, URLs and ratios intact
//! (`"Noon: 12:00"` → `Noon` / `12:00`). The flip side is that a term can
//! never contain a `:`.

use crate::error::{FlashError, Result};
use crate::model::Card;
use tracing::debug;

pub const DELIMITER: char = ':';

/// Parse every line of `response_text`, keeping the ones that form a card.
///
/// Line order is preserved. Blank lines, lines without a delimiter, lines with
/// an empty term and lines with an empty definition produce nothing.
pub fn parse(response_text: &str) -> Vec<Card> {
    let mut dropped = 0usize;
    let cards: Vec<Card> = response_text
        .lines()
        .filter_map(|line| {
            let card = parse_line(line);
            if card.is_none() && !line.trim().is_empty() {
                dropped += 1;
            }
            card
        })
        .collect();

    debug!(kept = cards.len(), dropped, "parsed model response");
    cards
}

/// Parse a single `term: definition` line.
pub fn parse_line(line: &str) -> Option<Card> {
    // `tail` is everything after the first delimiter, later ones included.
    let (head, tail) = line.split_once(DELIMITER)?;

    let term = head.trim();
    if term.is_empty() {
        return None;
    }

    let definition = tail.trim();
    if definition.is_empty() {
        return None;
    }

    Some(Card::new(term, definition))
}

/// Parse a model response, telling "nothing came back" apart from
/// "something came back but none of it was usable".
///
/// Only a response with no text at all is empty; blank lines are text that
/// yielded no cards.
pub fn classify_response(response_text: &str) -> Result<Vec<Card>> {
    if response_text.is_empty() {
        return Err(FlashError::EmptyResponse);
    }

    let cards = parse(response_text);
    if cards.is_empty() {
        return Err(FlashError::NoValidLines);
    }
    Ok(cards)
}
