use crate::commands::{count_label, CmdMessage, CmdResult};
use crate::controls::Controls;
use crate::error::{FlashError, Result};
use crate::store::CardStore;
use crate::validate::validate_str;
use std::fs;
use std::path::Path;
use tracing::info;

/// Replace the deck with the contents of a JSON file.
pub fn run(store: &mut CardStore, controls: &Controls, path: &Path) -> Result<CmdResult> {
    controls.ensure_load_enabled()?;

    let outcome = fs::read_to_string(path)
        .map_err(FlashError::Io)
        .and_then(|text| validate_str(&text));
    let state = store.settle_load(outcome)?;
    info!(path = %path.display(), cards = store.len(), "loaded deck from file");

    let mut result = CmdResult::default().with_cards(store.cards(), state);
    if store.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} contains no flashcards.",
            path.display()
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Loaded {} from {}.",
            count_label(store.len()),
            path.display()
        )));
    }
    Ok(result)
}
