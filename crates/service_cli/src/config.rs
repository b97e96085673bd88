//! CLI configuration management.
//!
//! Settings come from a TOML file (default `leasebook.toml`), with
//! environment variable overrides applied on top. A missing file means
//! defaults; a file that exists but does not parse is an error.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// How schedules are printed.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Symbol printed before amounts in tables
    pub currency_symbol: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: "info".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(format) = std::env::var("LEASEBOOK_FORMAT") {
            self.format = match format.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => self.format,
            };
        }

        if let Ok(log_level) = std::env::var("LEASEBOOK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(symbol) = std::env::var("LEASEBOOK_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.currency_symbol.trim().is_empty() {
            errors.push("currency_symbol cannot be empty".to_string());
        }
        if self.currency_symbol.chars().count() > 4 {
            errors.push(format!(
                "currency_symbol '{}' is longer than 4 characters",
                self.currency_symbol
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency_symbol, "$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("format = \"json\"\ncurrency_symbol = \"€\"\n");
        let config = CliConfig::load(file.path()).unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let file = write_config("format = [unterminated");
        assert!(matches!(
            CliConfig::load_or_default(file.path()),
            Err(ConfigError::Parse(_))
        ));

        let file = write_config("format = \"xml\"");
        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_with_env_and_validate() {
        let file = write_config("format = \"json\"\n");
        let config = CliConfig::load_with_env_and_validate(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);

        let file = write_config("log_level = \"loud\"\n");
        assert!(matches!(
            CliConfig::load_with_env_and_validate(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("LEASEBOOK_FORMAT", "JSON");
        std::env::set_var("LEASEBOOK_CURRENCY_SYMBOL", "£");
        let config = CliConfig::default().with_env_override();
        std::env::remove_var("LEASEBOOK_FORMAT");
        std::env::remove_var("LEASEBOOK_CURRENCY_SYMBOL");

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = CliConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert!(errors.iter().any(|e| e.contains("log_level")));
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "Debug"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = CliConfig {
            format: OutputFormat::Json,
            log_level: "verbose".to_string(),
            currency_symbol: "  ".to_string(),
        };

        if let Err(ConfigError::Validation(errors)) = config.validate() {
            assert_eq!(errors.len(), 2);
        } else {
            panic!("Expected validation error");
        }
    }

    #[test]
    fn test_validate_long_currency_symbol() {
        let config = CliConfig {
            currency_symbol: "DOLLARS".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = error.to_string();
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
