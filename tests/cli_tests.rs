//! CLI integration tests.

mod support;

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use bookquote::testkit::fixtures::{BTC_USD_BOOK_JSON, EMPTY_BOOK_JSON, PRODUCTS_JSON};
use predicates::prelude::*;

use support::files::Workspace;

fn bookquote() -> Command {
    cargo_bin_cmd!("bookquote")
}

struct Inputs {
    workspace: Workspace,
    products: PathBuf,
    book: PathBuf,
}

impl Inputs {
    fn new(book: &str) -> Self {
        let workspace = Workspace::new();
        let products = workspace.write("products.json", PRODUCTS_JSON);
        let book = workspace.write("book.json", book);
        Self {
            workspace,
            products,
            book,
        }
    }

    fn quote(&self, from: &str, to: &str, action: &str, amount: &str) -> Command {
        let mut cmd = bookquote();
        cmd.arg("quote")
            .arg("--products")
            .arg(&self.products)
            .arg("--book")
            .arg(&self.book)
            .args(["--from", from, "--to", to, "--action", action, "--amount", amount]);
        cmd
    }
}

#[test]
fn test_help() {
    bookquote()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookquote"))
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("pairs"));
}

#[test]
fn test_version() {
    bookquote()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookquote"));
}

#[test]
fn quote_prints_price_and_total() {
    Inputs::new(BTC_USD_BOOK_JSON)
        .quote("BTC", "USD", "buy", "1.5")
        .assert()
        .success()
        .stdout(predicate::str::contains("BTC-USD Buy"))
        .stdout(predicate::str::contains("738.74 USD/BTC"))
        .stdout(predicate::str::contains("1108.11 USD"))
        .stdout(predicate::str::contains("Order valid"));
}

#[test]
fn quote_json_output() {
    Inputs::new(BTC_USD_BOOK_JSON)
        .quote("btc", "usd", "sell", "1")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""product": "BTC-USD""#))
        .stdout(predicate::str::contains(r#""quotePrice": "700.00""#))
        .stdout(predicate::str::contains(r#""isValid": true"#));
}

#[test]
fn quote_places_flag_overrides_precision() {
    Inputs::new(BTC_USD_BOOK_JSON)
        .quote("BTC", "USD", "buy", "1.5")
        .args(["--places", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("738.7367"));
}

#[test]
fn unfillable_quote_exits_nonzero_with_message() {
    Inputs::new(EMPTY_BOOK_JSON)
        .quote("BTC", "USD", "buy", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not fill order with open book"));
}

#[test]
fn oversized_quote_exits_nonzero() {
    let deep = r#"{"sequence": 1, "asks": [["705.40", "500", 3]]}"#;
    Inputs::new(deep)
        .quote("BTC", "USD", "buy", "255")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too Large. Amount out of bounds."));
}

#[test]
fn invalid_amount_is_reported() {
    Inputs::new(BTC_USD_BOOK_JSON)
        .quote("BTC", "USD", "buy", "-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount '-1'"));
}

#[test]
fn unknown_pair_is_reported() {
    Inputs::new(BTC_USD_BOOK_JSON)
        .quote("BTC", "GBP", "buy", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BTC-GBP does not exist"));
}

#[test]
fn malformed_book_is_reported() {
    Inputs::new(r#"{"sequence": 1, "asks": [["abc", "1", 1]]}"#)
        .quote("BTC", "USD", "buy", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("asks level 0"));
}

#[test]
fn missing_book_file_is_reported() {
    let workspace = Workspace::new();
    bookquote()
        .arg("quote")
        .arg("--products")
        .arg(workspace.write("products.json", PRODUCTS_JSON))
        .arg("--book")
        .arg(workspace.missing("nope.json"))
        .args(["--from", "BTC", "--to", "USD", "--amount", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn invalid_config_file_is_reported() {
    let inputs = Inputs::new(BTC_USD_BOOK_JSON);
    let config = inputs
        .workspace
        .write("config.toml", "[quote]\ndefault_places = 99\n");

    inputs
        .quote("BTC", "USD", "buy", "1")
        .arg("--config")
        .arg(config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("quote.default_places"));
}

#[test]
fn pairs_lists_products() {
    let workspace = Workspace::new();
    bookquote()
        .arg("pairs")
        .arg("--products")
        .arg(workspace.write("products.json", PRODUCTS_JSON))
        .assert()
        .success()
        .stdout(predicate::str::contains("3 products"))
        .stdout(predicate::str::contains("BTC-USD"))
        .stdout(predicate::str::contains("ETH-BTC"));
}

#[test]
fn pairs_filters_by_currency() {
    let workspace = Workspace::new();
    bookquote()
        .arg("pairs")
        .arg("--products")
        .arg(workspace.write("products.json", PRODUCTS_JSON))
        .args(["--currency", "btc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BTC trades against ETH, USD"))
        .stdout(predicate::str::contains("2 products"))
        .stdout(predicate::str::contains("ETH-USD").not());
}

#[test]
fn pairs_unknown_currency_fails() {
    let workspace = Workspace::new();
    bookquote()
        .arg("pairs")
        .arg("--products")
        .arg(workspace.write("products.json", PRODUCTS_JSON))
        .args(["--currency", "DOGE"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No products trade DOGE"));
}
