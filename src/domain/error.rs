//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that check the
//! invariants of price levels and product limits.
//!
//! # Examples
//!
//! ```
//! use bookquote::domain::{DomainError, PriceLevel};
//! use rust_decimal_macros::dec;
//!
//! let result = PriceLevel::try_new(dec!(0), dec!(1), dec!(1));
//! assert!(matches!(result, Err(DomainError::NonPositivePrice { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Price levels must quote a strictly positive price.
    #[error("price must be positive, got {price}")]
    NonPositivePrice {
        /// The invalid price that was provided.
        price: Decimal,
    },

    /// Available size at a level cannot be negative.
    #[error("size must not be negative, got {size}")]
    NegativeSize {
        /// The invalid size that was provided.
        size: Decimal,
    },

    /// Order counts cannot be negative.
    #[error("order count must not be negative, got {count}")]
    NegativeOrderCount {
        /// The invalid order count that was provided.
        count: Decimal,
    },

    /// Product size bounds cannot be negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeBound {
        /// Which bound was negative.
        field: &'static str,
        /// The invalid bound.
        value: Decimal,
    },

    /// The minimum size must not exceed the maximum size.
    #[error("base_min_size {min} exceeds base_max_size {max}")]
    InvertedBounds {
        /// Minimum size.
        min: Decimal,
        /// Maximum size.
        max: Decimal,
    },

    #[error("unknown action '{0}', expected buy or sell")]
    UnknownAction(String),

    #[error("unknown currency role '{0}', expected base or quote")]
    UnknownRole(String),

    #[error("currency code cannot be empty")]
    EmptyCurrency,
}
