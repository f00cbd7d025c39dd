//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for levels, books, products and catalogs.
//! - [`fixtures`] - Exchange-shaped JSON documents for wire and CLI tests.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod fixtures;
