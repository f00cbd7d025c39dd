//! Trade direction types.
//!
//! - [`Action`] - Whether the caller buys or sells
//! - [`CurrencyRole`] - Which leg of the product the quote is denominated in
//! - [`TradeSide`] - Which side of the book a trade walks
//!
//! Using the BTC-USD book, BTC is the base and USD the quote currency.
//! Asking "what does 1 BTC cost in USD" is a quote in the [`Quote`] role with
//! a BTC amount; asking "how much BTC do 500 USD get me" is a quote in the
//! [`Base`] role with a USD amount.
//!
//! [`Quote`]: CurrencyRole::Quote
//! [`Base`]: CurrencyRole::Base

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// What the caller wants to do with the input currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => f.write_str("Buy"),
            Self::Sell => f.write_str("Sell"),
        }
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(DomainError::UnknownAction(s.to_string())),
        }
    }
}

/// Leg of the product the quote price and total are denominated in.
///
/// The input amount is always denominated in the complementary leg: a
/// `Quote` role quote takes a base-currency amount, a `Base` role quote takes
/// a quote-currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyRole {
    Base,
    Quote,
}

impl fmt::Display for CurrencyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => f.write_str("base"),
            Self::Quote => f.write_str("quote"),
        }
    }
}

impl FromStr for CurrencyRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "quote" => Ok(Self::Quote),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

/// Side of the book a trade is filled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Bid,
    Ask,
}

impl TradeSide {
    /// Side walked for a trade.
    ///
    /// | action | role  | side |
    /// |--------|-------|------|
    /// | Buy    | Quote | asks |
    /// | Buy    | Base  | bids |
    /// | Sell   | Quote | bids |
    /// | Sell   | Base  | asks |
    #[must_use]
    pub const fn for_trade(action: Action, role: CurrencyRole) -> Self {
        match (action, role) {
            // buy base with quote currency
            (Action::Buy, CurrencyRole::Quote) => Self::Ask,
            // buy quote currency with base
            (Action::Buy, CurrencyRole::Base) => Self::Bid,
            // sell base for quote currency
            (Action::Sell, CurrencyRole::Quote) => Self::Bid,
            // sell quote currency for base
            (Action::Sell, CurrencyRole::Base) => Self::Ask,
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bid => f.write_str("bids"),
            Self::Ask => f.write_str("asks"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_table() {
        assert_eq!(
            TradeSide::for_trade(Action::Buy, CurrencyRole::Quote),
            TradeSide::Ask
        );
        assert_eq!(
            TradeSide::for_trade(Action::Buy, CurrencyRole::Base),
            TradeSide::Bid
        );
        assert_eq!(
            TradeSide::for_trade(Action::Sell, CurrencyRole::Quote),
            TradeSide::Bid
        );
        assert_eq!(
            TradeSide::for_trade(Action::Sell, CurrencyRole::Base),
            TradeSide::Ask
        );
    }

    #[test]
    fn action_parses_case_insensitively() {
        assert_eq!("BUY".parse::<Action>().unwrap(), Action::Buy);
        assert_eq!(" sell ".parse::<Action>().unwrap(), Action::Sell);
        assert_eq!(
            "hold".parse::<Action>(),
            Err(DomainError::UnknownAction("hold".into()))
        );
    }

    #[test]
    fn role_parses() {
        assert_eq!("Base".parse::<CurrencyRole>().unwrap(), CurrencyRole::Base);
        assert_eq!("quote".parse::<CurrencyRole>().unwrap(), CurrencyRole::Quote);
        assert!("usd".parse::<CurrencyRole>().is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(Action::Buy.to_string(), "Buy");
        assert_eq!(CurrencyRole::Quote.to_string(), "quote");
        assert_eq!(TradeSide::Ask.to_string(), "asks");
    }
}
