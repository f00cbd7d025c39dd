//! Volume-weighted quotes against one side of an order book.
//!
//! A quote is built in three steps:
//!
//! 1. [`is_fillable`] walks levels best to worst until the requested amount
//!    is covered, recording every level it touched.
//! 2. [`weighted_average_price`] averages the touched prices, weighting each
//!    level by its order count and scaling the last level by the fraction
//!    actually used.
//! 3. [`generate_quote`] picks the side, inverts the price for quotes in the
//!    base leg, derives the total and rounds both figures.
//!
//! Every level is treated as one synthetic fill unit per aggregated order,
//! so the average is order-count weighted rather than size weighted.
//!
//! # Examples
//!
//! ```
//! use bookquote::domain::{Action, CurrencyRole, OrderBook, PriceLevel};
//! use bookquote::engine::generate_quote;
//! use rust_decimal_macros::dec;
//!
//! let book = OrderBook::new(
//!     1,
//!     vec![],
//!     vec![
//!         PriceLevel::try_new(dec!(705.40), dec!(1), dec!(1)).unwrap(),
//!         PriceLevel::try_new(dec!(805.41), dec!(1), dec!(1)).unwrap(),
//!     ],
//! );
//!
//! let quote = generate_quote(&book, CurrencyRole::Quote, Action::Buy, dec!(1.5), 2).unwrap();
//! assert!(quote.fillable);
//! assert_eq!(quote.quote_price, dec!(738.74));
//! assert_eq!(quote.total, dec!(1108.11));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    Action, CurrencyRole, FillResult, OrderBook, OrderCount, Price, PriceLevel, Quote, TradeSide,
    Volume,
};

/// Decimal places used when the caller does not ask for a precision.
pub const DEFAULT_PLACES: u32 = 2;

/// Book data that cannot produce a meaningful price.
///
/// Business outcomes such as thin liquidity are reported through
/// [`Quote::fillable`]; these errors mean the input itself is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("price index {index} is outside the {len} levels on this side")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("visited levels carry no orders to weight the price by")]
    NoOrders,

    #[error("decimal overflow while {0}")]
    Overflow(&'static str),
}

/// Walk `levels` best to worst until `amount` is covered.
///
/// Each level absorbs [`PriceLevel::consumable`] in the unit of `amount`.
/// The walk stops on the first level that brings the remaining amount to
/// zero or below. A non-positive `amount` is never fillable and visits
/// nothing.
pub fn is_fillable(
    levels: &[PriceLevel],
    role: CurrencyRole,
    amount: Volume,
) -> Result<FillResult, EngineError> {
    if amount <= Volume::ZERO {
        debug!(%amount, "non-positive amount, nothing to fill");
        return Ok(FillResult::unfilled(amount));
    }

    let mut remaining = amount;
    let mut price_indices = Vec::new();

    for (index, level) in levels.iter().enumerate() {
        let consumable = level
            .consumable(role)
            .ok_or(EngineError::Overflow("converting level size"))?;
        remaining = remaining
            .checked_sub(consumable)
            .ok_or(EngineError::Overflow("subtracting level size"))?;
        price_indices.push(index);

        if remaining <= Volume::ZERO {
            break;
        }
    }

    let fillable = remaining <= Volume::ZERO;
    debug!(
        %role,
        %amount,
        levels = levels.len(),
        visited = price_indices.len(),
        %remaining,
        fillable,
        "walked book side"
    );

    Ok(FillResult {
        fillable,
        price_indices,
        remaining_amount: remaining,
    })
}

/// Running sums behind the weighted average: `Σ price × orders` and
/// `Σ orders`.
#[derive(Debug, Clone, Copy)]
struct Weighted {
    notional: Decimal,
    orders: OrderCount,
}

impl Weighted {
    fn price(&self) -> Result<Price, EngineError> {
        ratio(self.notional, self.orders, Decimal::ONE)
    }
}

/// `numerator × scale / denominator`, multiplying first so the only rounding
/// happens in the final division.
fn ratio(numerator: Decimal, denominator: Decimal, scale: Decimal) -> Result<Decimal, EngineError> {
    if denominator.is_zero() {
        return Err(EngineError::NoOrders);
    }
    numerator
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_div(denominator))
        .ok_or(EngineError::Overflow("dividing weighted sums"))
}

fn accumulate(
    levels: &[PriceLevel],
    role: CurrencyRole,
    price_indices: &[usize],
    remaining_amount: Volume,
) -> Result<Weighted, EngineError> {
    let mut weighted = Weighted {
        notional: Decimal::ZERO,
        orders: OrderCount::ZERO,
    };
    let last = price_indices.len().saturating_sub(1);

    for (position, &index) in price_indices.iter().enumerate() {
        let level = levels.get(index).ok_or(EngineError::IndexOutOfRange {
            index,
            len: levels.len(),
        })?;
        let mut orders = level.order_count();

        if position == last && !remaining_amount.is_zero() {
            // remaining is negative here: its magnitude is the unused part
            let divisor = level
                .consumable(role)
                .ok_or(EngineError::Overflow("converting level size"))?;
            if divisor.is_zero() {
                return Err(EngineError::NoOrders);
            }
            let fraction = divisor
                .checked_add(remaining_amount)
                .and_then(|used| used.checked_div(divisor))
                .ok_or(EngineError::Overflow("scaling partial level"))?;
            orders = orders
                .checked_mul(fraction)
                .ok_or(EngineError::Overflow("scaling partial level"))?;
        }

        let contribution = level
            .price()
            .checked_mul(orders)
            .ok_or(EngineError::Overflow("weighting level price"))?;
        weighted.notional = weighted
            .notional
            .checked_add(contribution)
            .ok_or(EngineError::Overflow("summing weighted prices"))?;
        weighted.orders = weighted
            .orders
            .checked_add(orders)
            .ok_or(EngineError::Overflow("summing order counts"))?;
    }

    Ok(weighted)
}

/// Order-count weighted average of the prices at `price_indices`.
///
/// When `remaining_amount` is non-zero the last level only contributes the
/// share of its orders that was consumed,
/// `(consumable + remaining_amount) / consumable`.
pub fn weighted_average_price(
    levels: &[PriceLevel],
    role: CurrencyRole,
    price_indices: &[usize],
    remaining_amount: Volume,
) -> Result<Price, EngineError> {
    let weighted = accumulate(levels, role, price_indices, remaining_amount)?;
    let price = weighted.price()?;
    debug!(
        %role,
        notional = %weighted.notional,
        orders = %weighted.orders,
        %price,
        "weighted average price"
    );
    Ok(price)
}

/// Quote `amount` against `book` for the given role and action, rounding the
/// price and total to `places` decimal digits.
///
/// Quotes in the [`Base`](CurrencyRole::Base) role invert the book price so
/// it reads as base currency per unit of quote currency.
pub fn generate_quote(
    book: &OrderBook,
    role: CurrencyRole,
    action: Action,
    amount: Volume,
    places: u32,
) -> Result<Quote, EngineError> {
    let side = TradeSide::for_trade(action, role);
    let levels = book.side(side);
    let fill = is_fillable(levels, role, amount)?;

    if !fill.fillable {
        debug!(%side, %action, %amount, "order not fillable");
        return Ok(Quote::unfillable(places));
    }

    let weighted = accumulate(levels, role, &fill.price_indices, fill.remaining_amount)?;

    let (quote_price, total) = match role {
        CurrencyRole::Quote => (
            weighted.price()?,
            ratio(weighted.notional, weighted.orders, amount)?,
        ),
        CurrencyRole::Base => (
            ratio(weighted.orders, weighted.notional, Decimal::ONE)?,
            ratio(weighted.orders, weighted.notional, amount)?,
        ),
    };

    debug!(
        %side,
        %action,
        %role,
        %amount,
        %quote_price,
        %total,
        places,
        "generated quote"
    );

    Ok(Quote::filled(quote_price, total, places))
}
