//! Command-line interface definitions.

pub mod output;
pub mod pairs;
pub mod quote;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::domain::{Action, Currency};
use crate::error::{Error, Result};

/// Bookquote - Order-book quotes for currency conversions.
#[derive(Parser, Debug)]
#[command(name = "bookquote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote a conversion against a level-2 order book
    Quote(QuoteArgs),

    /// List tradeable currency pairs
    Pairs(PairsArgs),
}

/// Arguments for the `quote` subcommand.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Product listing JSON file
    #[arg(long)]
    pub products: PathBuf,

    /// Level-2 order book JSON file for the product
    #[arg(long)]
    pub book: PathBuf,

    /// Currency the amount is given in
    #[arg(long)]
    pub from: Currency,

    /// Currency to quote in
    #[arg(long)]
    pub to: Currency,

    /// Buy or sell
    #[arg(long, default_value = "buy")]
    pub action: Action,

    /// Amount of the `from` currency
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Decimal places for price and total (defaults to the product's precision)
    #[arg(long)]
    pub places: Option<u32>,

    /// Print the quote and validation as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `pairs` subcommand.
#[derive(Parser, Debug)]
pub struct PairsArgs {
    /// Product listing JSON file
    #[arg(long)]
    pub products: PathBuf,

    /// Only show pairs trading this currency
    #[arg(long)]
    pub currency: Option<Currency>,
}

impl Cli {
    /// Load the configuration file, if any, and apply flag overrides.
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(config.with_overrides(self.log_level.clone(), self.json_logs))
    }
}

/// Run a parsed command.
pub fn execute(command: &Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::Quote(args) => quote::run(args, config),
        Commands::Pairs(args) => pairs::run(args),
    }
}

pub(crate) fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
