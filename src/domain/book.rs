//! Order book types for market depth representation.
//!
//! - [`PriceLevel`] - One aggregated price level with size and order count
//! - [`OrderBook`] - Two-sided level-2 snapshot for a single product
//!
//! # Order Book Structure
//!
//! An order book has two sides:
//! - **Bids**: Buy orders, sorted by price descending (best bid first)
//! - **Asks**: Sell orders, sorted by price ascending (best ask first)
//!
//! Both sides are taken as delivered by the producer; nothing here re-sorts
//! them.
//!
//! # Examples
//!
//! ```
//! use bookquote::domain::{OrderBook, PriceLevel, TradeSide};
//! use rust_decimal_macros::dec;
//!
//! let book = OrderBook::new(
//!     1,
//!     vec![PriceLevel::try_new(dec!(705.40), dec!(1), dec!(1)).unwrap()],
//!     vec![PriceLevel::try_new(dec!(8179), dec!(0.09125942), dec!(1)).unwrap()],
//! );
//!
//! assert_eq!(book.best_ask().unwrap().price(), dec!(8179));
//! assert_eq!(book.side(TradeSide::Bid).len(), 1);
//! ```

use super::error::DomainError;
use super::money::{OrderCount, Price, Volume};
use super::trade::{CurrencyRole, TradeSide};

/// A single aggregated price level in an order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    price: Price,
    size: Volume,
    order_count: OrderCount,
}

impl PriceLevel {
    /// Creates a price level, checking `price > 0`, `size >= 0` and
    /// `order_count >= 0`.
    pub fn try_new(
        price: Price,
        size: Volume,
        order_count: OrderCount,
    ) -> Result<Self, DomainError> {
        if price <= Price::ZERO {
            return Err(DomainError::NonPositivePrice { price });
        }
        if size < Volume::ZERO {
            return Err(DomainError::NegativeSize { size });
        }
        if order_count < OrderCount::ZERO {
            return Err(DomainError::NegativeOrderCount { count: order_count });
        }
        Ok(Self {
            price,
            size,
            order_count,
        })
    }

    /// Returns the price at this level.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the base-currency volume resting at this level.
    #[must_use]
    pub const fn size(&self) -> Volume {
        self.size
    }

    /// Returns the number of orders aggregated into this level.
    #[must_use]
    pub const fn order_count(&self) -> OrderCount {
        self.order_count
    }

    /// Amount this level can absorb, in the unit of the caller's input.
    ///
    /// A quote in the quote leg is requested with a base amount, so the level
    /// offers its `size` directly. A quote in the base leg is requested with a
    /// quote-currency amount, so the size is converted through the price.
    /// Returns `None` on decimal overflow.
    #[must_use]
    pub fn consumable(&self, role: CurrencyRole) -> Option<Volume> {
        match role {
            CurrencyRole::Quote => Some(self.size),
            CurrencyRole::Base => self.size.checked_mul(self.price),
        }
    }
}

/// Level-2 order book snapshot for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBook {
    sequence: u64,
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl OrderBook {
    /// Create an order book from already sorted sides.
    #[must_use]
    pub const fn new(sequence: u64, bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self {
            sequence,
            bids,
            asks,
        }
    }

    /// Create an order book with no levels on either side.
    #[must_use]
    pub const fn empty(sequence: u64) -> Self {
        Self::new(sequence, Vec::new(), Vec::new())
    }

    /// Sequence number of the snapshot.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Get all bid levels
    #[must_use]
    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    /// Get all ask levels
    #[must_use]
    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }

    /// Levels on the given side, best price first.
    #[must_use]
    pub fn side(&self, side: TradeSide) -> &[PriceLevel] {
        match side {
            TradeSide::Bid => &self.bids,
            TradeSide::Ask => &self.asks,
        }
    }

    /// Best bid (highest buy price)
    #[must_use]
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Best ask (lowest sell price)
    #[must_use]
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }
}
