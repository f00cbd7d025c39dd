//! Exchange-agnostic domain types: order books, trade directions, quotes,
//! products and validation outcomes.

mod book;
mod error;
mod ids;
mod money;
mod product;
mod quote;
mod trade;
mod validation;

pub use book::{OrderBook, PriceLevel};
pub use error::DomainError;
pub use ids::{Currency, ProductId};
pub use money::{round_to_places, OrderCount, Price, Volume, MAX_PLACES};
pub use product::{Product, ProductLimits};
pub use quote::{FillResult, Quote};
pub use trade::{Action, CurrencyRole, TradeSide};
pub use validation::{
    ValidationErrorKind, ValidationResult, TOO_LARGE_MESSAGE, TOO_SMALL_MESSAGE,
    UNFILLABLE_MESSAGE,
};
