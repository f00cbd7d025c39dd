//! Exchange products and their size limits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::ids::{Currency, ProductId};
use super::money::Volume;
use super::trade::CurrencyRole;

/// Allowed order size range for a product, in its base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductLimits {
    base_min_size: Volume,
    base_max_size: Volume,
}

impl ProductLimits {
    /// Create limits, checking both bounds are non-negative and ordered.
    pub fn try_new(base_min_size: Volume, base_max_size: Volume) -> Result<Self, DomainError> {
        if base_min_size < Volume::ZERO {
            return Err(DomainError::NegativeBound {
                field: "base_min_size",
                value: base_min_size,
            });
        }
        if base_max_size < Volume::ZERO {
            return Err(DomainError::NegativeBound {
                field: "base_max_size",
                value: base_max_size,
            });
        }
        if base_min_size > base_max_size {
            return Err(DomainError::InvertedBounds {
                min: base_min_size,
                max: base_max_size,
            });
        }
        Ok(Self {
            base_min_size,
            base_max_size,
        })
    }

    #[must_use]
    pub const fn base_min_size(&self) -> Volume {
        self.base_min_size
    }

    #[must_use]
    pub const fn base_max_size(&self) -> Volume {
        self.base_max_size
    }
}

/// A tradeable product as listed by the exchange catalog.
///
/// Decimal fields accept either JSON strings (`"0.01"`) or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub base_currency: Currency,
    pub quote_currency: Currency,
    pub base_min_size: Decimal,
    pub base_max_size: Decimal,
    /// Smallest price step in the quote currency, e.g. `0.01`.
    #[serde(default)]
    pub quote_increment: Option<Decimal>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Product {
    /// Size limits of this product.
    pub fn limits(&self) -> Result<ProductLimits, DomainError> {
        ProductLimits::try_new(self.base_min_size, self.base_max_size)
    }

    /// Role of `currency` within this product, if it is one of its legs.
    #[must_use]
    pub fn role_of(&self, currency: &Currency) -> Option<CurrencyRole> {
        if *currency == self.base_currency {
            Some(CurrencyRole::Base)
        } else if *currency == self.quote_currency {
            Some(CurrencyRole::Quote)
        } else {
            None
        }
    }

    /// Decimal places a quote in `role` is rounded to.
    ///
    /// Quotes in the quote currency follow the product's `quote_increment`
    /// (`0.01` gives 2 places); quotes in the base currency use `fallback`.
    /// `default` covers products listed without an increment.
    #[must_use]
    pub fn quote_places(&self, role: CurrencyRole, default: u32, fallback: u32) -> u32 {
        match role {
            CurrencyRole::Base => fallback,
            CurrencyRole::Quote => self
                .quote_increment
                .map_or(default, |increment| increment.normalize().scale()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn btc_usd(increment: Option<Decimal>) -> Product {
        Product {
            id: ProductId::from("BTC-USD"),
            base_currency: Currency::try_new("BTC").unwrap(),
            quote_currency: Currency::try_new("USD").unwrap(),
            base_min_size: dec!(0.01),
            base_max_size: dec!(250),
            quote_increment: increment,
            display_name: Some("BTC/USD".into()),
            status: Some("online".into()),
        }
    }

    #[test]
    fn limits_reject_inverted_bounds() {
        assert_eq!(
            ProductLimits::try_new(dec!(5), dec!(1)),
            Err(DomainError::InvertedBounds {
                min: dec!(5),
                max: dec!(1)
            })
        );
    }

    #[test]
    fn limits_reject_negative_bounds() {
        assert!(matches!(
            ProductLimits::try_new(dec!(-1), dec!(1)),
            Err(DomainError::NegativeBound {
                field: "base_min_size",
                ..
            })
        ));
    }

    #[test]
    fn product_limits() {
        let limits = btc_usd(None).limits().unwrap();
        assert_eq!(limits.base_min_size(), dec!(0.01));
        assert_eq!(limits.base_max_size(), dec!(250));
    }

    #[test]
    fn role_of_legs() {
        let product = btc_usd(None);
        let btc = Currency::try_new("btc").unwrap();
        let usd = Currency::try_new("usd").unwrap();
        let eth = Currency::try_new("eth").unwrap();

        assert_eq!(product.role_of(&btc), Some(CurrencyRole::Base));
        assert_eq!(product.role_of(&usd), Some(CurrencyRole::Quote));
        assert_eq!(product.role_of(&eth), None);
    }

    #[test]
    fn quote_places_follow_increment() {
        assert_eq!(
            btc_usd(Some(dec!(0.01))).quote_places(CurrencyRole::Quote, 2, 8),
            2
        );
        assert_eq!(
            btc_usd(Some(dec!(0.01000000))).quote_places(CurrencyRole::Quote, 2, 8),
            2
        );
        assert_eq!(
            btc_usd(Some(dec!(0.00001))).quote_places(CurrencyRole::Quote, 2, 8),
            5
        );
        assert_eq!(btc_usd(None).quote_places(CurrencyRole::Quote, 3, 8), 3);
        assert_eq!(
            btc_usd(Some(dec!(0.01))).quote_places(CurrencyRole::Base, 2, 8),
            8
        );
    }

    #[test]
    fn product_deserializes_string_decimals() {
        let json = r#"{
            "id": "BTC-USD",
            "base_currency": "BTC",
            "quote_currency": "USD",
            "base_min_size": "0.01",
            "base_max_size": "250",
            "quote_increment": "0.01",
            "display_name": "BTC/USD",
            "status": "online",
            "margin_enabled": false,
            "status_message": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, btc_usd(Some(dec!(0.01))));
    }

    #[test]
    fn product_deserializes_numeric_decimals() {
        let json = r#"{
            "id": "BTC-USD",
            "base_currency": "BTC",
            "quote_currency": "USD",
            "base_min_size": 0.01,
            "base_max_size": 250
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.base_min_size, dec!(0.01));
        assert_eq!(product.quote_increment, None);
    }
}
