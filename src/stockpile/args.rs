use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpile")]
#[command(about = "Command-line inventory manager with spreadsheet-backed storage", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new product
    #[command(alias = "add")]
    Register {
        /// Product name (unique, case-insensitive)
        name: String,

        /// Initial stock quantity
        #[arg(value_parser = parse_quantity)]
        quantity: u32,

        /// Unit price, e.g. 2.50
        #[arg(value_parser = parse_price)]
        price: Decimal,
    },

    /// Record a sale, decrementing stock
    Sell {
        /// Product id
        id: u32,

        /// Units sold
        #[arg(value_parser = parse_quantity)]
        quantity: u32,
    },

    /// Add stock to a product
    Restock {
        /// Product id
        id: u32,

        /// Units added
        #[arg(value_parser = parse_quantity)]
        quantity: u32,
    },

    /// List the inventory, id-ascending
    #[command(alias = "ls")]
    List,

    /// Find a product by id or name
    Find {
        /// Numeric id or (case-insensitive) product name
        term: String,
    },

    /// Export the inventory to a second spreadsheet file
    Export {
        /// Output path (defaults to estoque_exportado.csv in the data dir)
        path: Option<PathBuf>,
    },

    /// Open the persisted spreadsheet with the OS default application
    Open,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, export-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Explicit text-to-number coercion for quantities. Checked by clap before
/// any command runs, so no mutation is ever attempted on bad input.
pub fn parse_quantity(s: &str) -> Result<u32, String> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| format!("quantity must be a non-negative whole number, got '{}'", s))
}

/// Explicit coercion for prices: a non-negative decimal.
pub fn parse_price(s: &str) -> Result<Decimal, String> {
    let price: Decimal = s
        .trim()
        .parse()
        .map_err(|_| format!("price must be a decimal number, got '{}'", s))?;
    if price.is_sign_negative() {
        return Err(format!("price cannot be negative, got '{}'", s));
    }
    Ok(price)
}
