//! Riskdesk CLI - Command Line Operations for the Option Risk Engine
//!
//! This is the operational entry point for the riskdesk pricing and
//! portfolio-aggregation engine.
//!
//! # Commands
//!
//! - `riskdesk price` - Price a single European option with Greeks
//! - `riskdesk book --trades <file>` - Aggregate a trade book from CSV
//! - `riskdesk curves --trades <file>` - Emit spot-grid risk curves
//!
//! # Architecture
//!
//! As the service layer in the M-R-S layering, this crate orchestrates
//! the model and risk layers behind a command-line interface; the
//! engine itself never initiates work on its own.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Riskdesk Option Pricing Engine CLI
#[derive(Parser)]
#[command(name = "riskdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European option and print its Greeks
    Price {
        /// Current spot price of the underlying
        #[arg(short, long)]
        spot: f64,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Time to maturity in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Risk-free rate as a fraction (e.g. 0.05)
        #[arg(short, long, default_value = "0.01")]
        rate: f64,

        /// Volatility as a fraction (e.g. 0.20)
        #[arg(long, default_value = "0.2")]
        vol: f64,

        /// Option type (call or put)
        #[arg(short = 'o', long, default_value = "call")]
        option_type: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Aggregate a book of trades from CSV and print the risk snapshot
    Book {
        /// Path to the trade CSV file
        #[arg(long)]
        trades: String,

        /// Live spot price
        #[arg(short, long)]
        spot: f64,

        /// Live volatility as a fraction
        #[arg(long, default_value = "0.2")]
        vol: f64,

        /// Live risk-free rate as a fraction
        #[arg(short, long, default_value = "0.01")]
        rate: f64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Emit portfolio P&L/Greek curves over a spot grid as CSV
    Curves {
        /// Path to the trade CSV file
        #[arg(long)]
        trades: String,

        /// Grid start spot
        #[arg(long, default_value = "50.0")]
        from: f64,

        /// Grid end spot
        #[arg(long, default_value = "150.0")]
        to: f64,

        /// Number of grid points
        #[arg(long, default_value = "200")]
        points: usize,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            vol,
            option_type,
            format,
        } => commands::price::run(spot, strike, expiry, rate, vol, &option_type, &format),
        Commands::Book {
            trades,
            spot,
            vol,
            rate,
            format,
        } => commands::book::run(&trades, spot, vol, rate, &format),
        Commands::Curves {
            trades,
            from,
            to,
            points,
            output,
        } => commands::curves::run(&trades, from, to, points, output.as_deref()),
    }
}
