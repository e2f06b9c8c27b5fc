use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::clipboard::DEFAULT_CLIPBOARD_COMMAND;
use crate::error::{MsgCodeError, Result};
use crate::validation::InputValidator;
use crate::verification::{DEFAULT_MAX_DIGITS, DEFAULT_MIN_DIGITS};

/// Location of the Messages store relative to the home directory
pub const DEFAULT_STORE_RELATIVE_PATH: &str = "Library/Messages/chat.db";

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "MSG_CODE";

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub output: OutputConfig,
    pub code: CodeConfig,
    pub clipboard: ClipboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Empty means `~/Library/Messages/chat.db`
    pub path: String,
    /// 0 reads every message
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub self_label: String,
    pub human_readable: bool,
    pub format: String, // "txt", "csv" or "json"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConfig {
    pub min_digits: usize,
    pub max_digits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    pub command: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub format: String, // "json" or "text"
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                path: String::new(),
                limit: 0,
            },
            output: OutputConfig {
                self_label: "Me".to_string(),
                human_readable: false,
                format: "txt".to_string(),
            },
            code: CodeConfig {
                min_digits: DEFAULT_MIN_DIGITS,
                max_digits: DEFAULT_MAX_DIGITS,
            },
            clipboard: ClipboardConfig {
                command: DEFAULT_CLIPBOARD_COMMAND.to_string(),
                args: Vec::new(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                file_path: None,
                format: "text".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    ///
    /// Defaults, then `config/default` and `config/local` if present, then
    /// `explicit_file` (which must exist), then `MSG_CODE_*` variables.
    pub fn load(explicit_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        if let Some(path) = explicit_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("clipboard.args"),
            )
            .build()
            .map_err(|e| MsgCodeError::InvalidConfig(format!("Failed to load configuration: {e}")))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| MsgCodeError::InvalidConfig(format!("Failed to deserialize configuration: {e}")))?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(MsgCodeError::InvalidConfig(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level, valid_levels
            )));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(MsgCodeError::InvalidConfig(format!(
                "Invalid log format: {}. Must be one of: {:?}",
                self.logging.format, valid_formats
            )));
        }

        InputValidator::validate_output_format(&self.output.format)?;
        InputValidator::validate_self_label(&self.output.self_label)?;
        InputValidator::validate_code_digits(self.code.min_digits, self.code.max_digits)?;

        if self.clipboard.command.trim().is_empty() {
            return Err(MsgCodeError::InvalidConfig("clipboard.command cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Path of the message store: the configured one, or the default under
    /// the user's home directory.
    pub fn resolve_store_path(&self) -> Result<PathBuf> {
        let path = if self.store.path.trim().is_empty() {
            default_store_path().ok_or_else(|| {
                MsgCodeError::InvalidConfig("Cannot determine home directory for the default store path".to_string())
            })?
        } else {
            PathBuf::from(&self.store.path)
        };

        InputValidator::validate_store_path(&path)?;
        Ok(path)
    }

    /// Get log level from environment or config
    #[must_use]
    pub fn get_log_level(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.logging.level.clone())
    }
}

/// `~/Library/Messages/chat.db` for the invoking user
#[must_use]
pub fn default_store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_STORE_RELATIVE_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store.limit, 0);
        assert_eq!(config.code.min_digits, 4);
        assert_eq!(config.code.max_digits, 6);
        assert_eq!(config.clipboard.command, "pbcopy");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let mut config = AppConfig::default();
        config.code.min_digits = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_store_path_is_used() {
        let mut config = AppConfig::default();
        config.store.path = "/tmp/chat.db".to_string();
        assert_eq!(config.resolve_store_path().unwrap(), PathBuf::from("/tmp/chat.db"));
    }
}
