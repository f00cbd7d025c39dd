//! Order validation outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message shown when the walked side of the book cannot cover the order.
pub const UNFILLABLE_MESSAGE: &str = "Could not fill order with open book";

/// Message shown when the amount exceeds the product maximum.
pub const TOO_LARGE_MESSAGE: &str = "Too Large. Amount out of bounds.";

/// Message shown when the amount is below the product minimum.
pub const TOO_SMALL_MESSAGE: &str = "Too Small. Amount out of bounds.";

/// Reason an order was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationErrorKind {
    None,
    Unfillable,
    TooSmall,
    TooLarge,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Unfillable => "unfillable",
            Self::TooSmall => "too small",
            Self::TooLarge => "too large",
        };
        f.write_str(name)
    }
}

/// Accept/reject decision for a quoted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_kind: ValidationErrorKind,
    /// User-facing explanation, empty when valid.
    pub message: String,
}

impl ValidationResult {
    /// An accepted order.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_kind: ValidationErrorKind::None,
            message: String::new(),
        }
    }

    /// A rejected order with the canonical message for `kind`.
    #[must_use]
    pub fn rejected(kind: ValidationErrorKind) -> Self {
        let message = match kind {
            ValidationErrorKind::None => "",
            ValidationErrorKind::Unfillable => UNFILLABLE_MESSAGE,
            ValidationErrorKind::TooSmall => TOO_SMALL_MESSAGE,
            ValidationErrorKind::TooLarge => TOO_LARGE_MESSAGE,
        };
        Self {
            is_valid: kind == ValidationErrorKind::None,
            error_kind: kind,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            f.write_str("valid")
        } else {
            f.write_str(&self.message)
        }
    }
}
