//! Configuration management for flight-registry.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::DEFAULT_INDENT;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "flight-registry";

/// Prefix of environment variable overrides.
const ENV_PREFIX: &str = "FLIGHT_REGISTRY_";

/// Largest accepted JSON indentation.
const MAX_INDENT: usize = 16;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHT_REGISTRY_`, sections split on `__`)
/// 2. TOML config file at `~/.config/flight-registry/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Interactive loop configuration.
    pub repl: ReplConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// File used by `save` and `load` when no file name is given.
    pub default_file: Option<PathBuf>,
    /// Indentation width of saved JSON files.
    pub indent: usize,
}

/// Interactive loop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Prompt printed before each command.
    pub prompt: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_file: None,
            indent: DEFAULT_INDENT,
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `FLIGHT_REGISTRY_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.indent == 0 || self.storage.indent > MAX_INDENT {
            return Err(Error::ConfigValidation {
                message: format!(
                    "indent ({}) must be between 1 and {MAX_INDENT}",
                    self.storage.indent
                ),
            });
        }

        if let Some(path) = &self.storage.default_file {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "default_file must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.default_file.is_none());
        assert_eq!(config.storage.indent, 4);
        assert_eq!(config.repl.prompt, ">>> ");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_indent() {
        let mut config = Config::default();
        config.storage.indent = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("indent"));
    }

    #[test]
    fn test_validate_huge_indent() {
        let mut config = Config::default();
        config.storage.indent = 64;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_default_file() {
        let mut config = Config::default();
        config.storage.default_file = Some(PathBuf::new());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("default_file"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("flight-registry"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\ndefault_file = \"flights.json\"\nindent = 2\n\n[repl]\nprompt = \"flights> \"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(
            config.storage.default_file,
            Some(PathBuf::from("flights.json"))
        );
        assert_eq!(config.storage.indent, 2);
        assert_eq!(config.repl.prompt, "flights> ");
    }

    #[test]
    fn test_load_rejects_invalid_toml_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nindent = 0\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }

    #[test]
    fn test_storage_config_deserialize() {
        let json = r#"{"indent": 8}"#;
        let storage: StorageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(storage.indent, 8);
        assert!(storage.default_file.is_none());
    }

    #[test]
    fn test_repl_config_serialize() {
        let repl = ReplConfig::default();
        let json = serde_json::to_string(&repl).unwrap();
        assert!(json.contains("prompt"));
    }
}
