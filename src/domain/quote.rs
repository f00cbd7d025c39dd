//! Quote results.
//!
//! - [`FillResult`] - Outcome of walking one side of the book
//! - [`Quote`] - Final, rounded price and total handed back to callers

use serde::{Deserialize, Serialize};

use super::money::{round_to_places, Price, Volume};

/// Outcome of walking price levels for a requested amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillResult {
    /// Whether the walk covered the whole amount.
    pub fillable: bool,
    /// Indices of every level visited, best first.
    pub price_indices: Vec<usize>,
    /// Amount left after the walk. Zero or negative once covered; the
    /// magnitude of a negative value is the unused part of the last level.
    pub remaining_amount: Volume,
}

impl FillResult {
    /// A walk that never started.
    #[must_use]
    pub fn unfilled(amount: Volume) -> Self {
        Self {
            fillable: false,
            price_indices: Vec::new(),
            remaining_amount: amount,
        }
    }

    /// True when the last visited level was consumed exactly.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.fillable && self.remaining_amount.is_zero()
    }
}

/// Price quote for a requested trade.
///
/// `quote_price` and `total` are rounded to the requested number of decimal
/// places. Both are zero when the order cannot be filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub fillable: bool,
    pub quote_price: Price,
    pub total: Volume,
}

impl Quote {
    /// Quote for an order the book cannot cover.
    #[must_use]
    pub fn unfillable(places: u32) -> Self {
        Self {
            fillable: false,
            quote_price: round_to_places(Price::ZERO, places),
            total: round_to_places(Volume::ZERO, places),
        }
    }

    /// Quote for a covered order, rounding both figures to `places`.
    #[must_use]
    pub fn filled(quote_price: Price, total: Volume, places: u32) -> Self {
        Self {
            fillable: true,
            quote_price: round_to_places(quote_price, places),
            total: round_to_places(total, places),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unfillable_quote_is_zero_at_scale() {
        let quote = Quote::unfillable(2);
        assert!(!quote.fillable);
        assert_eq!(quote.quote_price.to_string(), "0.00");
        assert_eq!(quote.total.to_string(), "0.00");
    }

    #[test]
    fn filled_quote_rounds() {
        let quote = Quote::filled(dec!(738.7366666), dec!(1108.105), 2);
        assert!(quote.fillable);
        assert_eq!(quote.quote_price, dec!(738.74));
        assert_eq!(quote.total, dec!(1108.11));
    }

    #[test]
    fn quote_serializes_camel_case() {
        let quote = Quote::filled(dec!(705.4), dec!(705.4), 2);
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["fillable"], true);
        assert_eq!(json["quotePrice"], "705.40");
        assert_eq!(json["total"], "705.40");
    }

    #[test]
    fn exact_fill_detection() {
        let exact = FillResult {
            fillable: true,
            price_indices: vec![0],
            remaining_amount: dec!(0),
        };
        assert!(exact.is_exact());
        assert!(!FillResult::unfilled(dec!(1)).is_exact());
    }
}
