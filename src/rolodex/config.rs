use crate::book::DEFAULT_BIRTHDAY_WINDOW;
use crate::error::{Result, RolodexError};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: &[&str] = &["birthday-window", "data-file"];

/// Configuration for rolodex, stored in `config.json` next to the contacts file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Days ahead `birthdays` looks when no window is given
    #[serde(default = "default_birthday_window")]
    pub birthday_window: u32,

    /// File name of the contacts snapshot inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_birthday_window() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            birthday_window: default_birthday_window(),
            data_file: default_data_file(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "birthday-window" => Some(self.birthday_window.to_string()),
            "data-file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "birthday-window" => {
                self.birthday_window = value.parse().map_err(|_| {
                    RolodexError::Config(format!(
                        "birthday-window must be a non-negative number of days, got '{}'",
                        value
                    ))
                })?;
            }
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(RolodexError::Config(format!(
                        "data-file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            other => {
                return Err(RolodexError::Config(format!(
                    "Unknown config key: {}",
                    other
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.birthday_window, 7);
        assert_eq!(config.data_file, "contacts.json");
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = RolodexConfig::default();
        assert_eq!(config.get("birthday-window").as_deref(), Some("7"));
        assert_eq!(config.get("data-file").as_deref(), Some("contacts.json"));
        assert_eq!(config.get("color"), None);
    }

    #[test]
    fn test_set_birthday_window() {
        let mut config = RolodexConfig::default();
        config.set("birthday-window", "14").unwrap();
        assert_eq!(config.birthday_window, 14);
        assert!(config.set("birthday-window", "-1").is_err());
        assert!(config.set("birthday-window", "soon").is_err());
        assert_eq!(config.birthday_window, 14);
    }

    #[test]
    fn test_set_data_file_rejects_paths() {
        let mut config = RolodexConfig::default();
        config.set("data-file", "work.json").unwrap();
        assert_eq!(config.data_file, "work.json");
        assert!(config.set("data-file", "../evil.json").is_err());
        assert!(config.set("data-file", "  ").is_err());
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = RolodexConfig::default();
        let err = config.set("theme", "dark").unwrap_err();
        assert_eq!(err.to_string(), "Config error: Unknown config key: theme");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RolodexConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = RolodexConfig::default();
        config.set("birthday-window", "30").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.birthday_window, 30);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"birthday_window": 3}"#).unwrap();
        let loaded = RolodexConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.birthday_window, 3);
        assert_eq!(loaded.data_file, "contacts.json");
    }
}
