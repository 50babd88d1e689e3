//! Trade CSV loading.
//!
//! Reads trade records into a [`Portfolio`], falling back to the model
//! price when no entry premium is supplied (matching the trade-entry
//! form, where a blank premium means "price me at the model").

use serde::Deserialize;
use tracing::debug;

use desk_models::analytical::BlackScholes;
use desk_models::instruments::{OptionContract, PayoffType};
use desk_risk::book::{EntryQuote, Portfolio, Position, PositionIdSource, Side};

use crate::{CliError, Result};

/// One row of the trade CSV.
///
/// Expected header:
/// `type,side,strike,qty,spot,vol,rate,maturity,premium`
/// with `premium` optional (blank or zero means model price).
#[derive(Debug, Deserialize)]
pub struct TradeRecord {
    /// Option type ("call" or "put")
    #[serde(rename = "type")]
    pub option_type: String,
    /// Trade side ("buy" or "sell")
    pub side: String,
    /// Strike price
    pub strike: f64,
    /// Number of contracts
    pub qty: u32,
    /// Spot observed at booking
    pub spot: f64,
    /// Volatility at booking (fraction)
    pub vol: f64,
    /// Risk-free rate at booking (fraction)
    pub rate: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Entry premium per contract; blank or zero uses the model price
    pub premium: Option<f64>,
}

/// Parses an option-type argument.
pub fn parse_payoff(value: &str) -> Result<PayoffType> {
    match value.to_ascii_lowercase().as_str() {
        "call" | "c" => Ok(PayoffType::Call),
        "put" | "p" => Ok(PayoffType::Put),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown option type: {}. Supported: call, put",
            other
        ))),
    }
}

/// Parses a side argument.
pub fn parse_side(value: &str) -> Result<Side> {
    match value.to_ascii_lowercase().as_str() {
        "buy" | "b" => Ok(Side::Buy),
        "sell" | "s" => Ok(Side::Sell),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown side: {}. Supported: buy, sell",
            other
        ))),
    }
}

/// Builds a position from one CSV record.
pub fn build_position(ids: &mut PositionIdSource, record: &TradeRecord) -> Result<Position> {
    let payoff = parse_payoff(&record.option_type)?;
    let side = parse_side(&record.side)?;

    let contract = OptionContract::new(payoff, record.strike, record.maturity)
        .map_err(desk_risk::book::BookError::from)?;

    let premium = match record.premium {
        Some(p) if p > 0.0 => p,
        _ => {
            // Blank or zero premium: mark at the model price observed
            // at booking
            let model = BlackScholes::new(record.spot, record.rate, record.vol)
                .map_err(desk_risk::book::BookError::from)?;
            model.price(record.strike, record.maturity, payoff)
        }
    };

    let entry = EntryQuote::new(record.spot, record.vol, record.rate, premium)?;
    Ok(Position::new(ids.next_id(), contract, side, record.qty, entry)?)
}

/// Loads a whole trade CSV into a portfolio.
pub fn load_book(path: &str) -> Result<Portfolio> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut ids = PositionIdSource::new();
    let mut book = Portfolio::new();

    for result in reader.deserialize() {
        let record: TradeRecord = result?;
        let position = build_position(&mut ids, &record)?;
        debug!("Booked position {}", position.id());
        book.add(position)?;
    }

    Ok(book)
}
