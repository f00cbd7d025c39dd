//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`PriceLevel`], [`OrderBook`],
//! [`Product`] and [`ProductCatalog`] so tests focus on assertions rather
//! than construction boilerplate. Builders panic on invalid input.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::ProductCatalog;
use crate::domain::{Currency, OrderBook, PriceLevel, Product, ProductId};

/// Create a [`Currency`] from a code.
pub fn currency(code: &str) -> Currency {
    Currency::try_new(code).expect("valid currency code")
}

/// Create a [`PriceLevel`] from price, size and order count.
pub fn level(price: Decimal, size: Decimal, order_count: Decimal) -> PriceLevel {
    PriceLevel::try_new(price, size, order_count).expect("valid price level")
}

/// Create levels from `(price, size, order_count)` rows, keeping their order.
pub fn levels(rows: &[(Decimal, Decimal, Decimal)]) -> Vec<PriceLevel> {
    rows.iter()
        .map(|&(price, size, count)| level(price, size, count))
        .collect()
}

/// Create an [`OrderBook`] with sequence 1.
pub fn book(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> OrderBook {
    OrderBook::new(1, bids, asks)
}

/// Two ask levels at 705.40 and 805.41, one BTC and one order each.
pub fn two_level_asks() -> Vec<PriceLevel> {
    levels(&[
        (dec!(705.40), dec!(1), dec!(1)),
        (dec!(805.41), dec!(1), dec!(1)),
    ])
}

/// Create a product `BASE-QUOTE` with BTC-USD style limits (0.01 to 250)
/// and a 0.01 quote increment.
pub fn product(base: &str, quote: &str) -> Product {
    product_with_limits(base, quote, dec!(0.01), dec!(250))
}

/// Create a product `BASE-QUOTE` with custom size limits.
pub fn product_with_limits(base: &str, quote: &str, min: Decimal, max: Decimal) -> Product {
    let base_currency = currency(base);
    let quote_currency = currency(quote);
    Product {
        id: ProductId::from_pair(&base_currency, &quote_currency),
        display_name: Some(format!("{base_currency}/{quote_currency}")),
        base_currency,
        quote_currency,
        base_min_size: min,
        base_max_size: max,
        quote_increment: Some(dec!(0.01)),
        status: Some("online".to_string()),
    }
}

/// Catalog with BTC-USD, BTC-EUR, BTC-GBP, ETH-USD, ETH-BTC and LTC-BTC.
pub fn catalog() -> ProductCatalog {
    let mut eth_btc = product_with_limits("ETH", "BTC", dec!(0.01), dec!(1000));
    eth_btc.quote_increment = Some(dec!(0.00001));
    let mut ltc_btc = product_with_limits("LTC", "BTC", dec!(0.1), dec!(2000));
    ltc_btc.quote_increment = Some(dec!(0.00001));

    ProductCatalog::new([
        product("BTC", "USD"),
        product("BTC", "EUR"),
        product("BTC", "GBP"),
        product_with_limits("ETH", "USD", dec!(0.01), dec!(700)),
        eth_btc,
        ltc_btc,
    ])
}
