//! `shop` - command-line tools over a shop dataset.
//!
//! # Usage
//!
//! ```bash
//! # List categories and their products
//! shop categories
//!
//! # Five most expensive products, prices in euros
//! SHOP_CURRENCY=EUR shop top -n 5
//!
//! # Price a cart with 8% tax and a 10% discount
//! shop quote --item 1:2 --item 4:1 --tax 8 --discount 10
//!
//! # Order statistics for a user as JSON
//! shop stats --user 42
//! ```
//!
//! The dataset path, display currency, default tax rate and log format come
//! from the environment (see [`cli::Config`]); flags override them.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use catalog::ProductSearch;
use clap::{Parser, Subcommand};
use cli::commands::{orders, products, quote, users};
use cli::{Config, Dataset, LogFormat};
use domain::{Adjustments, Currency, Money, ProductId, UserId};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Shop catalog, cart and order tools")]
struct Cli {
    /// Dataset file (overrides SHOP_DATA)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Display currency code (overrides SHOP_CURRENCY)
    #[arg(long, global = true)]
    currency: Option<Currency>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a JSON user record and print it in canonical form
    DecodeUser {
        /// JSON user record
        json: String,
    },
    #[command(flatten)]
    Dataset(DatasetCommand),
}

/// Commands that read the dataset.
#[derive(Subcommand)]
enum DatasetCommand {
    /// List usernames of active users
    ActiveUsers,
    /// List categories with their products
    Categories,
    /// Show the most expensive products
    Top {
        /// Number of products
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
    /// Search products by text, category and price range
    Search {
        /// Text matched against product names and tags
        #[arg(default_value = "")]
        query: String,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<Decimal>,
    },
    /// Print a user's order statistics as JSON
    Stats {
        /// User id
        #[arg(short, long)]
        user: i64,
    },
    /// Price a cart built from PRODUCT_ID:QUANTITY items
    Quote {
        /// Cart item, may be repeated
        #[arg(short, long = "item", value_parser = quote::parse_item)]
        items: Vec<(ProductId, u32)>,

        /// Tax rate in percent (overrides SHOP_TAX_RATE)
        #[arg(long)]
        tax: Option<Decimal>,

        /// Discount in percent
        #[arg(long, default_value_t = Decimal::ZERO)]
        discount: Decimal,
    },
    /// Print a user from the dataset as JSON
    EncodeUser {
        /// User id
        #[arg(long)]
        id: i64,
    },
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries command output.
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(data) = cli.data.clone() {
        config.data_path = data;
    }
    if let Some(currency) = cli.currency.clone() {
        config.currency = currency;
    }

    init_tracing(&config);

    match run(cli, &config) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            report_failure(e.as_ref(), &mut std::io::stderr());
            std::process::exit(1);
        }
    }
}

/// Logs a failed command, writing it to `out` directly when the log filter
/// hides errors (for example `RUST_LOG=off`).
fn report_failure(error: &dyn std::error::Error, out: &mut impl Write) {
    tracing::error!("Command failed: {error}");
    if !tracing::enabled!(tracing::Level::ERROR) {
        let _ = writeln!(out, "Command failed: {error}");
    }
}

fn run(cli: Cli, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::DecodeUser { json } => Ok(users::decode(&json)?),
        Commands::Dataset(command) => {
            let dataset = Dataset::load(&config.data_path)?;
            run_on_dataset(command, &dataset, config)
        }
    }
}

fn run_on_dataset(
    command: DatasetCommand,
    dataset: &Dataset,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    let currency = &config.currency;

    let output = match command {
        DatasetCommand::ActiveUsers => users::active_users(dataset),
        DatasetCommand::Categories => products::categories(dataset),
        DatasetCommand::Top { n } => products::top(dataset, n, currency),
        DatasetCommand::Search {
            query,
            category,
            min_price,
            max_price,
        } => {
            let mut criteria = ProductSearch::new(query);
            if let Some(category) = category {
                criteria = criteria.category(category);
            }
            if let Some(min) = min_price {
                criteria = criteria.min_price(Money::new(min));
            }
            if let Some(max) = max_price {
                criteria = criteria.max_price(Money::new(max));
            }
            products::search(dataset, &criteria, currency)
        }
        DatasetCommand::Stats { user } => orders::stats(dataset, UserId::new(user))?,
        DatasetCommand::Quote {
            items,
            tax,
            discount,
        } => {
            let adjustments = Adjustments::none()
                .tax(tax.unwrap_or(config.tax_rate_percent))
                .discount(discount);
            quote::quote(dataset, &items, adjustments, currency)?
        }
        DatasetCommand::EncodeUser { id } => users::encode(dataset, UserId::new(id))?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::CliError;

    fn config_without_dataset() -> Config {
        Config {
            data_path: PathBuf::from("/nonexistent/shop.json"),
            ..Config::default()
        }
    }

    #[test]
    fn test_decode_user_needs_no_dataset() {
        let cli = Cli::try_parse_from([
            "shop",
            "decode-user",
            r#"{"id": 7, "username": "gina", "email": "g@x.io", "created_at": "2024-01-01T10:30"}"#,
        ])
        .unwrap();

        let output = run(cli, &config_without_dataset()).unwrap();
        assert!(output.contains(r#""username":"gina""#));
        assert!(output.contains("2024-01-01T10:30:00"));
    }

    #[test]
    fn test_dataset_commands_report_missing_dataset() {
        let cli = Cli::try_parse_from(["shop", "active-users"]).unwrap();

        let err = run(cli, &config_without_dataset()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Io { .. })
        ));
    }

    #[test]
    fn test_failure_is_written_when_logging_is_off() {
        // No subscriber is installed in tests, so error events are disabled.
        let error = CliError::UnknownUser(UserId::new(99));
        let mut out = Vec::new();

        report_failure(&error, &mut out);

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, format!("Command failed: {error}\n"));
    }
}
