//! `bookquote pairs`: tradeable pairs from a product listing.

use std::process::ExitCode;

use tabled::{Table, Tabled};

use crate::catalog::ProductCatalog;
use crate::cli::{output, read_input, PairsArgs};
use crate::domain::Product;
use crate::error::Result;
use crate::wire::parse_products;

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Quote")]
    quote: String,
    #[tabled(rename = "Min Size")]
    min_size: String,
    #[tabled(rename = "Max Size")]
    max_size: String,
    #[tabled(rename = "Increment")]
    increment: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Product> for PairRow {
    fn from(product: &Product) -> Self {
        Self {
            product: product.id.to_string(),
            base: product.base_currency.to_string(),
            quote: product.quote_currency.to_string(),
            min_size: product.base_min_size.to_string(),
            max_size: product.base_max_size.to_string(),
            increment: product
                .quote_increment
                .map_or_else(|| "-".to_string(), |i| i.to_string()),
            status: product.status.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn run(args: &PairsArgs) -> Result<ExitCode> {
    let catalog = ProductCatalog::new(parse_products(&read_input(&args.products)?)?);

    let rows: Vec<PairRow> = match &args.currency {
        Some(currency) => {
            let counters = catalog.counter_currencies(currency);
            if counters.is_empty() {
                output::warn(&format!("No products trade {currency}"));
                return Ok(ExitCode::FAILURE);
            }
            let names: Vec<String> = counters.iter().map(ToString::to_string).collect();
            output::note(&format!("{currency} trades against {}", names.join(", ")));
            println!();
            catalog
                .products()
                .filter(|product| product.role_of(currency).is_some())
                .map(PairRow::from)
                .collect()
        }
        None => catalog.products().map(PairRow::from).collect(),
    };

    output::section(&format!("{} products", rows.len()));
    output::table(&Table::new(rows).to_string());
    Ok(ExitCode::SUCCESS)
}
