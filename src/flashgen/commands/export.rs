use crate::commands::{count_label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Card;
use crate::store::CardStore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Save the current deck as a pretty-printed JSON array.
pub fn run(store: &CardStore, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::info("No flashcards to save."));
        return Ok(result);
    }

    let file = File::create(path)?;
    write_json(BufWriter::new(file), store.cards())?;
    info!(path = %path.display(), cards = store.len(), "saved deck");

    result.add_message(CmdMessage::success(format!(
        "Saved {} to {}.",
        count_label(store.len()),
        path.display()
    )));
    Ok(result.with_exported_to(path.to_path_buf()))
}

/// Two-space indented JSON, with a trailing newline.
pub fn write_json<W: Write>(mut writer: W, cards: &[Card]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, cards)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_str;
    use std::fs;

    fn store_with(cards: Vec<Card>) -> CardStore {
        let mut store = CardStore::new();
        store.settle_load(Ok(cards)).unwrap();
        store
    }

    #[test]
    fn test_write_json_format() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[Card::new("Term", "Def")]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[\n  {\n    \"term\": \"Term\",\n    \"definition\": \"Def\"\n  }\n]\n"
        );
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashcards.json");
        let cards = vec![
            Card::new("Noon", "12:00"),
            Card::new("Quote", "she said \"hi\""),
            Card::new("Noon", "duplicate terms survive"),
        ];

        let result = run(&store_with(cards.clone()), &path).unwrap();
        assert_eq!(result.exported_to.as_deref(), Some(path.as_path()));

        let reloaded = validate_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reloaded, cards);
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashcards.json");

        let result = run(&CardStore::new(), &path).unwrap();
        assert!(result.exported_to.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("flashcards.json");
        let err = run(&store_with(vec![Card::new("a", "b")]), &path).unwrap_err();
        assert!(matches!(err, crate::error::FlashError::Io(_)));
    }
}
