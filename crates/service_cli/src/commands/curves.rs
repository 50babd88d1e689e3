//! Curves command implementation
//!
//! Evaluates portfolio P&L/Greek curves over a spot grid and writes
//! them as CSV for graph rendering.

use std::io::Write;

use tracing::info;

use desk_risk::curves::{RiskCurves, SpotGrid};

use super::loader::load_book;
use crate::{CliError, Result};

/// Run the curves command
pub fn run(trades: &str, from: f64, to: f64, points: usize, output: Option<&str>) -> Result<()> {
    if from <= 0.0 || to <= from || points < 2 {
        return Err(CliError::InvalidArgument(format!(
            "Invalid grid: from={} to={} points={}",
            from, to, points
        )));
    }

    let book = load_book(trades)?;
    info!("Computing curves for {} positions over {} spots", book.len(), points);

    let grid = SpotGrid::new(from, to, points);
    let curves = RiskCurves::compute(&book, &grid)?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    writeln!(writer, "spot,pnl,delta,gamma,vega,theta,rho")?;
    for i in 0..curves.spots.len() {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            curves.spots[i],
            curves.pnl[i],
            curves.delta[i],
            curves.gamma[i],
            curves.vega[i],
            curves.theta[i],
            curves.rho[i]
        )?;
    }

    if let Some(path) = output {
        info!("Curves written to {}", path);
    }
    Ok(())
}
