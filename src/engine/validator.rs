//! Order validation against product size limits.

use tracing::{debug, warn};

use crate::domain::{
    CurrencyRole, ProductLimits, Quote, ValidationErrorKind, ValidationResult, Volume,
};

/// Check a quote and its input amount against the product's size limits.
///
/// An unfillable quote is always reported as [`ValidationErrorKind::Unfillable`],
/// whatever the amount. Limits are expressed in the product's base currency;
/// for quotes in the base role the amount is in the quote currency, so the
/// limits are converted with the quoted price before comparing. A zero quoted
/// price (a quote rounded below its precision) leaves the limits as given.
#[must_use]
pub fn validate(
    quote: &Quote,
    role: CurrencyRole,
    limits: &ProductLimits,
    amount: Volume,
) -> ValidationResult {
    if !quote.fillable {
        warn!(%amount, "order not fillable with open book");
        return ValidationResult::rejected(ValidationErrorKind::Unfillable);
    }

    let (min, max) = bounds_in_amount_unit(quote, role, limits);

    let kind = if amount > max {
        ValidationErrorKind::TooLarge
    } else if amount < min {
        ValidationErrorKind::TooSmall
    } else {
        ValidationErrorKind::None
    };

    if kind == ValidationErrorKind::None {
        debug!(%amount, %min, %max, "order within bounds");
    } else {
        warn!(%amount, %min, %max, %kind, "order out of bounds");
    }

    ValidationResult::rejected(kind)
}

fn bounds_in_amount_unit(
    quote: &Quote,
    role: CurrencyRole,
    limits: &ProductLimits,
) -> (Volume, Volume) {
    let min = limits.base_min_size();
    let max = limits.base_max_size();

    match role {
        CurrencyRole::Quote => (min, max),
        CurrencyRole::Base => {
            let price = quote.quote_price;
            match (min.checked_div(price), max.checked_div(price)) {
                (Some(min), Some(max)) => (min, max),
                _ => {
                    warn!(%price, "cannot rescale limits by quoted price");
                    (min, max)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TOO_LARGE_MESSAGE, TOO_SMALL_MESSAGE, UNFILLABLE_MESSAGE};
    use rust_decimal_macros::dec;

    fn btc_usd_limits() -> ProductLimits {
        ProductLimits::try_new(dec!(0.01), dec!(250)).unwrap()
    }

    fn quote(price: rust_decimal::Decimal, total: rust_decimal::Decimal) -> Quote {
        Quote {
            fillable: true,
            quote_price: price,
            total,
        }
    }

    #[test]
    fn unfillable_wins() {
        let result = validate(
            &Quote::unfillable(2),
            CurrencyRole::Quote,
            &btc_usd_limits(),
            dec!(85),
        );
        assert!(!result.is_valid);
        assert_eq!(result.error_kind, ValidationErrorKind::Unfillable);
        assert_eq!(result.message, UNFILLABLE_MESSAGE);
    }

    #[test]
    fn quote_role_too_large() {
        let result = validate(
            &quote(dec!(705.4), dec!(0.07054)),
            CurrencyRole::Quote,
            &btc_usd_limits(),
            dec!(255),
        );
        assert_eq!(result.error_kind, ValidationErrorKind::TooLarge);
        assert_eq!(result.message, TOO_LARGE_MESSAGE);
    }

    #[test]
    fn quote_role_too_small() {
        let result = validate(
            &quote(dec!(705.4), dec!(0.07054)),
            CurrencyRole::Quote,
            &btc_usd_limits(),
            dec!(0.0001),
        );
        assert_eq!(result.error_kind, ValidationErrorKind::TooSmall);
        assert_eq!(result.message, TOO_SMALL_MESSAGE);
    }

    #[test]
    fn quote_role_within_bounds() {
        let result = validate(
            &quote(dec!(705.4), dec!(705.4)),
            CurrencyRole::Quote,
            &btc_usd_limits(),
            dec!(1),
        );
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn bounds_are_inclusive() {
        let limits = btc_usd_limits();
        let q = quote(dec!(705.4), dec!(705.4));
        assert!(validate(&q, CurrencyRole::Quote, &limits, dec!(0.01)).is_valid);
        assert!(validate(&q, CurrencyRole::Quote, &limits, dec!(250)).is_valid);
    }

    #[test]
    fn base_role_rescales_limits() {
        // 0.00141764 BTC per USD: min 0.01 BTC is about 7.05 USD
        let q = quote(dec!(0.00141764), dec!(1));
        let limits = btc_usd_limits();

        let small = validate(&q, CurrencyRole::Base, &limits, dec!(5));
        assert_eq!(small.error_kind, ValidationErrorKind::TooSmall);

        let large = validate(&q, CurrencyRole::Base, &limits, dec!(200000));
        assert_eq!(large.error_kind, ValidationErrorKind::TooLarge);

        let ok = validate(&q, CurrencyRole::Base, &limits, dec!(100));
        assert!(ok.is_valid);
    }

    #[test]
    fn base_role_zero_price_keeps_limits() {
        let q = quote(dec!(0), dec!(0));
        let result = validate(&q, CurrencyRole::Base, &btc_usd_limits(), dec!(300));
        assert_eq!(result.error_kind, ValidationErrorKind::TooLarge);
    }
}
