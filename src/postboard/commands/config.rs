use crate::commands::{CmdMessage, CmdResult};
use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = BoardConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BoardConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = BoardConfig::load(config_dir)?;
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(BoardError::Config(e)) => {
                    let mut res = CmdResult::default();
                    res.add_message(CmdMessage::error(e));
                    return Ok(res);
                }
                Err(e) => return Err(e),
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(BoardConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("api-url".into(), "http://board.local".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(dir.path(), ConfigAction::ShowKey("api-url".into())).unwrap();
        assert_eq!(shown.messages[0].content, "http://board.local");
    }

    #[test]
    fn unknown_key_reports_error() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("nope".into(), "1".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());

        let shown = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Error);
    }
}
