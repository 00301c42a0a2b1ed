use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::json_store::default_data_dir;

const MIN_LAST_INPUT_MS: u64 = 100;
const MAX_LAST_INPUT_MS: u64 = 10_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_data_dir_string")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_last_input_ms")]
    pub last_input_ms: u64,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_data_dir_string() -> String {
    default_data_dir().to_string_lossy().to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_last_input_ms() -> u64 {
    1500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            data_dir: default_data_dir_string(),
            log_level: default_log_level(),
            last_input_ms: default_last_input_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keytally")
            .join("config.toml")
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Clamp out-of-range values and replace blank strings with defaults.
    pub fn validate(&mut self) {
        self.last_input_ms = self
            .last_input_ms
            .clamp(MIN_LAST_INPUT_MS, MAX_LAST_INPUT_MS);
        if self.theme.trim().is_empty() {
            self.theme = default_theme();
        }
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir_string();
        }
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.last_input_ms, 1500);
        assert!(config.data_dir.contains("keytally"));
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
theme = "terminal-default"
data_dir = "/tmp/keytally-test"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/keytally-test"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.data_dir, deserialized.data_dir);
        assert_eq!(config.last_input_ms, deserialized.last_input_ms);
    }

    #[test]
    fn test_validate_clamps_and_fills_blanks() {
        let mut config = Config {
            theme: "  ".to_string(),
            data_dir: String::new(),
            log_level: String::new(),
            last_input_ms: 0,
        };
        config.validate();
        assert_eq!(config.last_input_ms, 100);
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.log_level, "info");
        assert!(!config.data_dir.is_empty());

        config.last_input_ms = 60_000;
        config.validate();
        assert_eq!(config.last_input_ms, 10_000);
    }
}
