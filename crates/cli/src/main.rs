//! ShopApp CLI - Drive the storefront engine from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally filtered
//! shop-cli catalog --category 1 --search phone
//!
//! # Replay a script of cart intents and print the resulting cart
//! shop-cli run script.yaml
//!
//! # Format an amount with thousands separators
//! shop-cli price 10990000
//!
//! # Show the sample order history
//! shop-cli orders
//!
//! # Structured logs for tooling
//! shop-cli --log-json run script.yaml
//! ```
//!
//! # Commands
//!
//! - `catalog` - Browse products
//! - `run` - Replay a YAML script against a fresh session
//! - `price` - Format an amount
//! - `orders` - Show order history

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shopapp_storefront::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "ShopApp storefront CLI")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        /// Catalog YAML file (defaults to `SHOP_CATALOG_PATH`, then the demo catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Replay a YAML script of cart intents against a fresh session
    Run {
        /// Script file
        script: PathBuf,

        /// Catalog YAML file (defaults to `SHOP_CATALOG_PATH`, then the demo catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Format an amount with thousands separators
    Price {
        /// Amount in minor units
        amount: u64,
    },
    /// Show the sample order history
    Orders {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopapp_cli=info,shopapp_storefront=info".into());

    let json_layer = cli.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!cli.log_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Catalog {
            catalog,
            category,
            search,
            json,
        } => {
            let catalog = commands::load_catalog(catalog.as_deref(), &config)?;
            commands::catalog::list(&catalog, category.as_deref(), &search, &config, json)?;
        }
        Commands::Run {
            script,
            catalog,
            json,
        } => {
            let catalog = commands::load_catalog(catalog.as_deref(), &config)?;
            commands::run::replay(&script, &catalog, config, json)?;
        }
        Commands::Price { amount } => commands::price(amount, &config),
        Commands::Orders { json } => commands::orders::list(&config, json)?,
    }
    Ok(())
}
