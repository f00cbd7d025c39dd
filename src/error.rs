use std::path::PathBuf;

use thiserror::Error;

use crate::amount::AmountError;
use crate::desk::QuoteError;
use crate::domain::DomainError;
use crate::engine::EngineError;
use crate::wire::WireError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
