//! Price command implementation
//!
//! Prices a single European option and prints its Greeks.

use tracing::info;

use desk_models::analytical::BlackScholes;
use desk_models::instruments::OptionContract;
use desk_risk::book::BookError;

use super::loader::parse_payoff;
use crate::{CliError, Result};

/// Run the price command
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    option_type: &str,
    format: &str,
) -> Result<()> {
    let payoff = parse_payoff(option_type)?;

    info!("Pricing {} K={} T={}y at S={}", payoff, strike, expiry, spot);

    let model = BlackScholes::new(spot, rate, vol).map_err(BookError::from)?;
    let contract = OptionContract::new(payoff, strike, expiry).map_err(BookError::from)?;
    let metrics = model.price_and_greeks(&contract);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        "table" => {
            println!("\n  {} K={} T={}y  (S={}, vol={}, r={})", payoff, strike, expiry, spot, vol, rate);
            println!("  ┌─────────┬────────────┐");
            println!("  │ price   │ {:>10.4} │", metrics.price);
            println!("  │ delta   │ {:>10.4} │", metrics.delta);
            println!("  │ gamma   │ {:>10.4} │", metrics.gamma);
            println!("  │ vega    │ {:>10.4} │", metrics.vega);
            println!("  │ theta   │ {:>10.4} │", metrics.theta);
            println!("  │ rho     │ {:>10.4} │", metrics.rho);
            println!("  └─────────┴────────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}
