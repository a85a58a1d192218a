//! # URL Bootstrap
//!
//! A deck can be shared as a link to the app with a `file` query parameter,
//! e.g. `https://cards.example.com/?file=decks/biology.json`. Opening such a
//! link loads the deck in display mode.
//!
//! Relative `file` values resolve against the page URL, the same way a
//! browser would resolve them.

use crate::error::{FlashError, Result};
use reqwest::Url;

pub const FILE_PARAM: &str = "file";

/// The raw value of the `file` query parameter, if present and non-empty.
pub fn file_param(page_url: &str) -> Result<Option<String>> {
    let url = parse_url(page_url)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == FILE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty()))
}

/// Resolve a `file` value against the page it came from.
pub fn resolve_payload_url(page_url: &str, file: &str) -> Result<String> {
    let base = parse_url(page_url)?;
    base.join(file)
        .map(String::from)
        .map_err(|e| FlashError::Network(format!("invalid file URL '{}': {}", file, e)))
}

/// The absolute URL of the deck a page link points at, if it points at one.
pub fn payload_url(page_url: &str) -> Result<Option<String>> {
    match file_param(page_url)? {
        Some(file) => resolve_payload_url(page_url, &file).map(Some),
        None => Ok(None),
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|e| FlashError::Network(format!("invalid URL '{}': {}", raw, e)))
}
