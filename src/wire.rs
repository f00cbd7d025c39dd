//! JSON wire format for level-2 books and product listings.
//!
//! Books arrive as `{ "sequence": n, "bids": [...], "asks": [...] }` where
//! each level is a `[price, size, num-orders]` array. Prices and sizes are
//! decimal strings; the order count is usually a JSON number. Both forms are
//! accepted for every field so hand-written fixtures parse too.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{DomainError, OrderBook, PriceLevel, Product, TradeSide};

/// Failure to turn wire data into domain values.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{side} level {index}: {field} '{value}' is not a decimal")]
    InvalidDecimal {
        side: TradeSide,
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("{side} level {index}: {source}")]
    InvalidLevel {
        side: TradeSide,
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// A decimal as it appears on the wire: quoted or bare.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireDecimal {
    Text(String),
    Number(serde_json::Number),
}

impl WireDecimal {
    fn parse(&self) -> Option<Decimal> {
        let text = match self {
            Self::Text(text) => text.trim().to_string(),
            Self::Number(number) => number.to_string(),
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }
}

impl fmt::Display for WireDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// One `[price, size, num-orders]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireLevel(pub WireDecimal, pub WireDecimal, pub WireDecimal);

/// Level-2 book as published by the exchange.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireBook {
    pub sequence: u64,
    #[serde(default)]
    pub bids: Vec<WireLevel>,
    #[serde(default)]
    pub asks: Vec<WireLevel>,
}

impl WireBook {
    /// Convert into a domain book, keeping the published level order.
    pub fn into_order_book(self) -> Result<OrderBook, WireError> {
        let bids = convert_side(TradeSide::Bid, &self.bids)?;
        let asks = convert_side(TradeSide::Ask, &self.asks)?;
        debug!(
            sequence = self.sequence,
            bids = bids.len(),
            asks = asks.len(),
            "order book parsed"
        );
        Ok(OrderBook::new(self.sequence, bids, asks))
    }
}

impl TryFrom<WireBook> for OrderBook {
    type Error = WireError;

    fn try_from(book: WireBook) -> Result<Self, Self::Error> {
        book.into_order_book()
    }
}

fn convert_side(side: TradeSide, levels: &[WireLevel]) -> Result<Vec<PriceLevel>, WireError> {
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| convert_level(side, index, level))
        .collect()
}

fn convert_level(side: TradeSide, index: usize, level: &WireLevel) -> Result<PriceLevel, WireError> {
    let field = |name: &'static str, raw: &WireDecimal| {
        raw.parse().ok_or_else(|| WireError::InvalidDecimal {
            side,
            index,
            field: name,
            value: raw.to_string(),
        })
    };
    let price = field("price", &level.0)?;
    let size = field("size", &level.1)?;
    let order_count = field("order count", &level.2)?;

    PriceLevel::try_new(price, size, order_count)
        .map_err(|source| WireError::InvalidLevel { side, index, source })
}

/// Parse a level-2 book document.
pub fn parse_book(json: &str) -> Result<OrderBook, WireError> {
    serde_json::from_str::<WireBook>(json)?.into_order_book()
}

/// Parse a product listing document.
pub fn parse_products(json: &str) -> Result<Vec<Product>, WireError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    debug!(count = products.len(), "products parsed");
    Ok(products)
}
