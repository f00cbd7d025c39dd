//! Configuration loading and validation.
//!
//! Configuration is an optional TOML file. Every section has defaults so an
//! absent file or an empty one behaves like [`Config::default`].

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::MAX_PLACES;
use crate::engine::DEFAULT_PLACES;
use crate::error::{ConfigError, Result};

/// Decimal places for quotes denominated in the base leg (satoshi precision).
pub const DEFAULT_FALLBACK_PLACES: u32 = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub quote: QuoteSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `bookquote=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Rounding settings applied by the quote desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuoteSettings {
    /// Places used when a product lists no quote increment.
    #[serde(default = "default_places")]
    pub default_places: u32,
    /// Places used when the quote is denominated in the product's base leg.
    #[serde(default = "default_fallback_places")]
    pub fallback_places: u32,
}

const fn default_places() -> u32 {
    DEFAULT_PLACES
}

const fn default_fallback_places() -> u32 {
    DEFAULT_FALLBACK_PLACES
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            default_places: default_places(),
            fallback_places: default_fallback_places(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, level: Option<String>, json_logs: bool) -> Self {
        if let Some(level) = level {
            self.logging.level = level;
        }
        if json_logs {
            self.logging.format = "json".into();
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }
        check_places("quote.default_places", self.quote.default_places)?;
        check_places("quote.fallback_places", self.quote.fallback_places)?;
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

fn check_places(field: &'static str, places: u32) -> Result<()> {
    if places > MAX_PLACES {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("{places} exceeds the maximum of {MAX_PLACES} decimal places"),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config = Config::parse("[quote]\nfallback_places = 6\n").unwrap();
        assert_eq!(config.quote.fallback_places, 6);
        assert_eq!(config.quote.default_places, DEFAULT_PLACES);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn rejects_places_beyond_decimal_scale() {
        let err = Config::parse("[quote]\ndefault_places = 29\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "quote.default_places",
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Config::parse("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn rejects_blank_level() {
        assert!(Config::parse("[logging]\nlevel = \" \"\n").is_err());
    }

    #[test]
    fn parse_errors_are_config_errors() {
        let err = Config::parse("[quote\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = Config::default().with_overrides(Some("debug".into()), true);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        let untouched = Config::default().with_overrides(None, false);
        assert_eq!(untouched, Config::default());
    }
}
