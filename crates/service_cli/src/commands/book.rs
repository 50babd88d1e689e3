//! Book command implementation
//!
//! Loads a trade CSV, aggregates it at the supplied live market, and
//! prints the risk strip plus per-position rows.

use tracing::info;

use desk_risk::book::MarketView;

use super::loader::load_book;
use crate::{CliError, Result};

/// Run the book command
pub fn run(trades: &str, spot: f64, vol: f64, rate: f64, format: &str) -> Result<()> {
    info!("Loading trades from {}", trades);
    let book = load_book(trades)?;
    info!("Booked {} positions", book.len());

    let market = MarketView::new(spot, vol, rate)?;
    let snapshot = book.aggregate(&market)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        "table" => {
            let t = &snapshot.totals;
            println!(
                "\n  P&L: {:.2}  Δ: {:.2}  Γ: {:.4}  V: {:.2}  Θ: {:.2}  Ρ: {:.2}",
                t.pnl, t.delta, t.gamma, t.vega, t.theta, t.rho
            );
            println!("\n  ┌──────┬────────────┬────────────┬──────────┐");
            println!("  │ id   │ price      │ pnl        │ delta    │");
            println!("  ├──────┼────────────┼────────────┼──────────┤");
            if snapshot.rows.is_empty() {
                println!("  │ (empty book)                             │");
            }
            for row in &snapshot.rows {
                println!(
                    "  │ {:>4} │ {:>10.4} │ {:>10.4} │ {:>8.4} │",
                    row.id, row.price, row.pnl, row.greeks.delta
                );
            }
            println!("  └──────┴────────────┴────────────┴──────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Aggregation complete");
    Ok(())
}
