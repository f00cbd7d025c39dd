//! Exchange-shaped JSON documents.
//!
//! Shapes follow the public level-2 book and product listing endpoints:
//! decimals as strings, book levels as `[price, size, num-orders]` arrays.

/// Product listing with BTC-USD, ETH-USD and ETH-BTC.
pub const PRODUCTS_JSON: &str = r#"[
  {
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
  },
  {
    "id": "ETH-USD",
    "base_currency": "ETH",
    "quote_currency": "USD",
    "base_min_size": "0.01",
    "base_max_size": "700",
    "quote_increment": "0.01",
    "display_name": "ETH/USD",
    "status": "online",
    "margin_enabled": false,
    "status_message": null
  },
  {
    "id": "ETH-BTC",
    "base_currency": "ETH",
    "quote_currency": "BTC",
    "base_min_size": "0.01",
    "base_max_size": "600",
    "quote_increment": "0.00001",
    "display_name": "ETH/BTC",
    "status": "online",
    "margin_enabled": false,
    "status_message": null
  }
]"#;

/// BTC-USD level-2 book: bids at 700 and 690, asks at 705.40 and 805.41.
pub const BTC_USD_BOOK_JSON: &str = r#"{
  "sequence": 3,
  "bids": [
    ["700.00", "1", 2],
    ["690.00", "2", 1]
  ],
  "asks": [
    ["705.40", "1", 1],
    ["805.41", "1", 1]
  ]
}"#;

/// Book with nothing resting on either side.
pub const EMPTY_BOOK_JSON: &str = r#"{ "sequence": 9, "bids": [], "asks": [] }"#;
