use crate::commands::{CmdMessage, CmdResult};
use crate::config::FlashConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = FlashConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlashError;

    #[test]
    fn test_show_all_returns_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(FlashConfig::default()));
    }

    #[test]
    fn test_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("export-file".into(), "deck.json".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("export-file".into())).unwrap();
        assert_eq!(result.messages[0].content, "export-file = deck.json");
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap_err();
        assert!(matches!(err, FlashError::Config(_)));
    }
}
