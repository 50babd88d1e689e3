//! Aggregation output types.

use desk_models::analytical::OptionMetrics;

use super::ids::PositionId;

/// Portfolio-level totals: P&L plus scalar-summed Greeks.
///
/// An empty book aggregates to all zeros.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskTotals {
    /// Total unrealized P&L
    pub pnl: f64,
    /// Net delta
    pub delta: f64,
    /// Net gamma
    pub gamma: f64,
    /// Net vega
    pub vega: f64,
    /// Net theta
    pub theta: f64,
    /// Net rho
    pub rho: f64,
}

impl RiskTotals {
    /// Totals with every field zero.
    pub fn zero() -> Self {
        Self {
            pnl: 0.0,
            delta: 0.0,
            gamma: 0.0,
            vega: 0.0,
            theta: 0.0,
            rho: 0.0,
        }
    }

    /// Folds one position's signed contribution into the totals.
    pub fn accumulate(&mut self, pnl: f64, greeks: &OptionMetrics) {
        self.pnl += pnl;
        self.delta += greeks.delta;
        self.gamma += greeks.gamma;
        self.vega += greeks.vega;
        self.theta += greeks.theta;
        self.rho += greeks.rho;
    }
}

impl Default for RiskTotals {
    fn default() -> Self {
        Self::zero()
    }
}

/// Detail row for one position, consumed by table rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRow {
    /// Position identifier
    pub id: PositionId,
    /// Live per-contract price
    pub price: f64,
    /// Unrealized P&L (signed, scaled by quantity)
    pub pnl: f64,
    /// Greeks scaled by signed quantity
    pub greeks: OptionMetrics,
}

/// Aggregated view of the book at one market state.
///
/// Rows appear in insertion order; totals are the scalar sums of the
/// row contributions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookSnapshot {
    /// Portfolio totals
    pub totals: RiskTotals,
    /// Per-position detail rows, insertion order
    pub rows: Vec<PositionRow>,
}

impl BookSnapshot {
    /// Snapshot of an empty book.
    pub fn empty() -> Self {
        Self {
            totals: RiskTotals::zero(),
            rows: Vec::new(),
        }
    }
}
