//! Live market inputs for revaluation.

use super::error::BookError;

/// Validated live market inputs supplied to aggregation.
///
/// Positions carry their contract terms; the spot, volatility, and rate
/// used for revaluation come from the caller at each refresh.
///
/// # Examples
/// ```
/// use desk_risk::book::MarketView;
///
/// let market = MarketView::new(100.0, 0.2, 0.05).unwrap();
/// assert_eq!(market.spot(), 100.0);
///
/// assert!(MarketView::new(-1.0, 0.2, 0.05).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketView {
    spot: f64,
    volatility: f64,
    rate: f64,
}

impl MarketView {
    /// Creates a market view with validation.
    ///
    /// # Errors
    /// - `BookError::Analytical` if `spot <= 0` or `volatility < 0`
    ///   (zero volatility is a defined boundary and accepted)
    pub fn new(spot: f64, volatility: f64, rate: f64) -> Result<Self, BookError> {
        if spot <= 0.0 {
            return Err(desk_models::analytical::AnalyticalError::InvalidSpot { spot }.into());
        }
        if volatility < 0.0 {
            return Err(
                desk_models::analytical::AnalyticalError::InvalidVolatility { volatility }.into(),
            );
        }
        Ok(Self {
            spot,
            volatility,
            rate,
        })
    }

    /// Returns the live spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the live volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the live risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}
