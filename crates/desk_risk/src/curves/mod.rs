//! Spot-grid risk curves.
//!
//! Evaluates portfolio P&L and Greeks across a range of underlying
//! prices, feeding the graph panels of a risk display. Each position is
//! repriced with its own entry volatility and rate; only the spot moves
//! along the grid.

use crate::book::{BookError, Portfolio};

/// Evenly spaced grid of spot prices.
///
/// The default covers 50 to 150 in 200 points, matching the display
/// range of the dashboard the engine feeds.
///
/// # Examples
/// ```
/// use desk_risk::curves::SpotGrid;
///
/// let grid = SpotGrid::default();
/// let spots = grid.spots();
/// assert_eq!(spots.len(), 200);
/// assert_eq!(spots[0], 50.0);
/// assert_eq!(*spots.last().unwrap(), 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotGrid {
    start: f64,
    stop: f64,
    points: usize,
}

impl SpotGrid {
    /// Creates a grid over `[start, stop]` with `points` samples.
    ///
    /// Callers supply a positive start below the stop and at least two
    /// points; the default grid satisfies all three.
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            stop,
            points,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points
    }

    /// True when the grid has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    /// Materialises the grid, endpoints included.
    pub fn spots(&self) -> Vec<f64> {
        if self.points == 0 {
            return Vec::new();
        }
        if self.points == 1 {
            return vec![self.start];
        }
        let step = (self.stop - self.start) / (self.points - 1) as f64;
        (0..self.points)
            .map(|i| self.start + step * i as f64)
            .collect()
    }
}

impl Default for SpotGrid {
    fn default() -> Self {
        Self::new(50.0, 150.0, 200)
    }
}

/// Portfolio P&L and Greek curves over a spot grid.
///
/// Every vector has the same length as `spots`; index `i` holds the
/// portfolio value at `spots[i]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskCurves {
    /// Grid of underlying prices
    pub spots: Vec<f64>,
    /// Portfolio P&L per grid point
    pub pnl: Vec<f64>,
    /// Net delta per grid point
    pub delta: Vec<f64>,
    /// Net gamma per grid point
    pub gamma: Vec<f64>,
    /// Net vega per grid point
    pub vega: Vec<f64>,
    /// Net theta per grid point
    pub theta: Vec<f64>,
    /// Net rho per grid point
    pub rho: Vec<f64>,
}

impl RiskCurves {
    /// Flat zero curves over a grid (the empty-book case).
    fn zero(spots: Vec<f64>) -> Self {
        let n = spots.len();
        Self {
            spots,
            pnl: vec![0.0; n],
            delta: vec![0.0; n],
            gamma: vec![0.0; n],
            vega: vec![0.0; n],
            theta: vec![0.0; n],
            rho: vec![0.0; n],
        }
    }

    /// Computes the curves for a book over a grid.
    ///
    /// Each position is priced with its own entry volatility and rate
    /// at every grid spot, then summed with side and quantity applied.
    pub fn compute(book: &Portfolio, grid: &SpotGrid) -> Result<Self, BookError> {
        let mut curves = Self::zero(grid.spots());

        for position in book.positions() {
            let signed_qty = position.signed_quantity();
            let premium = position.entry().premium();

            for (i, &spot) in curves.spots.iter().enumerate() {
                let m = position.metrics_at_spot(spot)?;
                curves.pnl[i] += signed_qty * (m.price - premium);
                curves.delta[i] += signed_qty * m.delta;
                curves.gamma[i] += signed_qty * m.gamma;
                curves.vega[i] += signed_qty * m.vega;
                curves.theta[i] += signed_qty * m.theta;
                curves.rho[i] += signed_qty * m.rho;
            }
        }

        Ok(curves)
    }
}
