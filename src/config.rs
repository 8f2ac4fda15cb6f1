//! Session configuration
//!
//! Settings for the interactive front-end. Values are resolved in order:
//! explicit override (CLI flag), environment variable, built-in default.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SENTINEL_ENV: &str = "PWD_STRENGTH_SENTINEL";
pub const FORMAT_ENV: &str = "PWD_STRENGTH_FORMAT";
pub const DEFAULT_SENTINEL: &str = "exit";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {name}")]
    InvalidVar { name: &'static str, value: String },
    #[error("Unknown output format: {0} (expected `text` or `json`)")]
    UnknownFormat(String),
}

/// How each analysis is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Word that ends the session, compared case-insensitively.
    pub sentinel: String,
    pub format: OutputFormat,
    /// Pass empty input to the analyzer instead of rejecting it.
    pub allow_empty: bool,
    /// Print the banner and a prompt before each read.
    pub interactive: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            format: OutputFormat::Text,
            allow_empty: false,
            interactive: true,
        }
    }
}

impl SessionConfig {
    /// Builds the configuration from the defaults plus environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_STRENGTH_SENTINEL`: word that ends the session (default `exit`)
    /// - `PWD_STRENGTH_FORMAT`: `text` or `json` (default `text`)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but blank, or names an unknown format.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(sentinel) = std::env::var(SENTINEL_ENV) {
            config.sentinel = parse_sentinel(SENTINEL_ENV, &sentinel)?;
        }

        if let Ok(format) = std::env::var(FORMAT_ENV) {
            config.format = format.parse()?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(sentinel = %config.sentinel, format = %config.format, "configuration loaded");

        Ok(config)
    }

    pub fn with_sentinel(mut self, sentinel: &str) -> Result<Self, ConfigError> {
        self.sentinel = parse_sentinel("--sentinel", sentinel)?;
        Ok(self)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Returns `true` if the input line is the sentinel word.
    pub fn is_sentinel(&self, line: &str) -> bool {
        line.to_lowercase() == self.sentinel.to_lowercase()
    }
}

fn parse_sentinel(name: &'static str, value: &str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidVar {
            name,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(SENTINEL_ENV);
        remove_env(FORMAT_ENV);

        let config = SessionConfig::from_env().unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.sentinel, "exit");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        set_env(SENTINEL_ENV, "quit");
        set_env(FORMAT_ENV, "JSON");

        let config = SessionConfig::from_env().unwrap();
        assert_eq!(config.sentinel, "quit");
        assert_eq!(config.format, OutputFormat::Json);

        remove_env(SENTINEL_ENV);
        remove_env(FORMAT_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_blank_sentinel() {
        set_env(SENTINEL_ENV, "   ");

        let result = SessionConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar { name: SENTINEL_ENV, .. })
        ));

        remove_env(SENTINEL_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_unknown_format() {
        remove_env(SENTINEL_ENV);
        set_env(FORMAT_ENV, "yaml");

        let result = SessionConfig::from_env();
        assert_eq!(result, Err(ConfigError::UnknownFormat("yaml".to_string())));

        remove_env(FORMAT_ENV);
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        let config = SessionConfig::default();
        assert!(config.is_sentinel("exit"));
        assert!(config.is_sentinel("EXIT"));
        assert!(config.is_sentinel("eXiT"));
        assert!(!config.is_sentinel("exit "));
        assert!(!config.is_sentinel("exited"));
    }

    #[test]
    fn test_with_sentinel_rejects_blank() {
        let result = SessionConfig::default().with_sentinel("");
        assert!(matches!(result, Err(ConfigError::InvalidVar { .. })));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(" Json ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
