//! Canonical test configurations.
//!
//! Single source of truth for config values used across tests.

use crate::config::QuoteSettings;

/// Quote settings with the stock precision: 2 places by default, 8 for
/// quotes in the base leg.
pub fn quote_settings() -> QuoteSettings {
    QuoteSettings::default()
}

/// A config file exercising every section.
pub const CONFIG_TOML: &str = r#"
[logging]
level = "info"
format = "json"

[quote]
default_places = 3
fallback_places = 6
"#;
