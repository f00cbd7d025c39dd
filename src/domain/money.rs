//! Monetary types for price and volume representation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Volume represented as a Decimal for precision.
pub type Volume = Decimal;

/// Number of resting orders at a level. Fractional once a level is only
/// partly consumed.
pub type OrderCount = Decimal;

/// Largest scale a `Decimal` can carry.
pub const MAX_PLACES: u32 = 28;

/// Round `value` to `places` decimal digits, half away from zero, and pad the
/// scale so the result always displays with exactly `places` digits.
#[must_use]
pub fn round_to_places(value: Decimal, places: u32) -> Decimal {
    let places = places.min(MAX_PLACES);
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded
}
