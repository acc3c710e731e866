//! Configuration file loading for the command line tool.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from `chess-rules.toml`. Every field is optional in the file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub output: OutputFormat,
    /// Depth used by `perft` when `--depth` is not given.
    #[serde(default = "default_perft_depth")]
    pub perft_depth: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_perft_depth() -> u32 {
    3
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            perft_depth: default_perft_depth(),
        }
    }
}

impl RulesConfig {
    /// Loads the configuration from `path`, or from [`Self::config_path()`]
    /// when no path is given. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns `chess-rules.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess-rules.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
log_level = "debug"
output = "json"
perft_depth = 5
"#;
        let config: RulesConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.perft_depth, 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: RulesConfig = toml::from_str("output = \"text\"").unwrap();
        assert_eq!(config, RulesConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.perft_depth, 3);
    }

    #[test]
    fn test_invalid_output_is_a_parse_error() {
        let result: Result<RulesConfig, _> = toml::from_str("output = \"xml\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("definitely/not/here/chess-rules.toml");
        assert_eq!(RulesConfig::load(Some(path)).unwrap(), RulesConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("chess-rules-{}.toml", std::process::id()));
        std::fs::write(&path, "perft_depth = 2\n").unwrap();
        let config = RulesConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.perft_depth, 2);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_unreadable_toml_is_reported() {
        let path = std::env::temp_dir().join(format!("chess-rules-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "perft_depth = [").unwrap();
        let result = RulesConfig::load(Some(&path));
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
