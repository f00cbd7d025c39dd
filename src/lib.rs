//! Bookquote - Volume-weighted quotes from level-2 order books.
//!
//! Given an order book snapshot, a trade direction and an amount, this crate
//! works out whether the book can fill the order, the order-count weighted
//! average price it would execute at, and the total in the output currency.
//! Quotes are then checked against the product's size limits.
//!
//! # Modules
//!
//! - [`domain`] - Exchange-agnostic types: price levels, books, quotes, products
//! - [`engine`] - Quote computation and order validation
//! - [`catalog`] - Product catalog and currency exchange map
//! - [`desk`] - Pair resolution, quoting and validation in one call
//! - [`wire`] - JSON book and product formats
//! - [`amount`] - User-entered amount parsing
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use bookquote::catalog::ProductCatalog;
//! use bookquote::config::QuoteSettings;
//! use bookquote::desk::{QuoteDesk, QuoteRequest};
//! use bookquote::domain::{Action, Currency};
//! use bookquote::wire::{parse_book, parse_products};
//!
//! let products = parse_products(r#"[{
//!     "id": "BTC-USD", "base_currency": "BTC", "quote_currency": "USD",
//!     "base_min_size": "0.01", "base_max_size": "250", "quote_increment": "0.01"
//! }]"#).unwrap();
//! let book = parse_book(r#"{
//!     "sequence": 1,
//!     "bids": [],
//!     "asks": [["705.40", "1", 1], ["805.41", "1", 1]]
//! }"#).unwrap();
//!
//! let desk = QuoteDesk::new(ProductCatalog::new(products), QuoteSettings::default());
//! let request = QuoteRequest::parse(
//!     "BTC".parse().unwrap(),
//!     "USD".parse::<Currency>().unwrap(),
//!     Action::Buy,
//!     "1.5",
//! ).unwrap();
//!
//! let quote = desk.quote(&request, &book).unwrap();
//! assert_eq!(quote.quote_price.to_string(), "738.74");
//! assert_eq!(quote.total.to_string(), "1108.11");
//! ```

pub mod amount;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod desk;
pub mod domain;
pub mod engine;
pub mod error;
pub mod wire;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
