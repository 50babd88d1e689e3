//! Price and Greeks container.

use num_traits::Float;

/// Theoretical price and first-order sensitivities of a single option.
///
/// Conventions: vega is the derivative per unit of volatility (not per
/// 1% move), theta per year of expiry with the usual sign (typically
/// negative for a long option), rho per unit of rate.
///
/// # Examples
/// ```
/// use desk_models::analytical::OptionMetrics;
///
/// let mut total = OptionMetrics::zero();
/// let leg = OptionMetrics {
///     price: 10.0_f64,
///     delta: 0.6,
///     gamma: 0.02,
///     vega: 39.0,
///     theta: -6.4,
///     rho: 53.0,
/// };
/// total.accumulate(&leg.scale(2.0));
/// assert_eq!(total.delta, 1.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionMetrics<T: Float = f64> {
    /// Theoretical price
    pub price: T,
    /// Delta (∂V/∂S)
    pub delta: T,
    /// Gamma (∂²V/∂S²)
    pub gamma: T,
    /// Vega (∂V/∂σ)
    pub vega: T,
    /// Theta (∂V/∂t, time decay)
    pub theta: T,
    /// Rho (∂V/∂r)
    pub rho: T,
}

impl<T: Float> OptionMetrics<T> {
    /// Metrics with every field zero.
    pub fn zero() -> Self {
        let zero = T::zero();
        Self {
            price: zero,
            delta: zero,
            gamma: zero,
            vega: zero,
            theta: zero,
            rho: zero,
        }
    }

    /// Scales every field by a factor (e.g. signed quantity).
    pub fn scale(&self, factor: T) -> Self {
        Self {
            price: self.price * factor,
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Adds another set of metrics field-wise.
    pub fn accumulate(&mut self, other: &Self) {
        self.price = self.price + other.price;
        self.delta = self.delta + other.delta;
        self.gamma = self.gamma + other.gamma;
        self.vega = self.vega + other.vega;
        self.theta = self.theta + other.theta;
        self.rho = self.rho + other.rho;
    }
}

impl<T: Float> Default for OptionMetrics<T> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionMetrics<f64> {
        OptionMetrics {
            price: 10.0,
            delta: 0.5,
            gamma: 0.02,
            vega: 39.0,
            theta: -6.4,
            rho: 53.0,
        }
    }

    #[test]
    fn test_zero() {
        let m = OptionMetrics::<f64>::zero();
        assert_eq!(m.price, 0.0);
        assert_eq!(m.delta, 0.0);
        assert_eq!(m.gamma, 0.0);
        assert_eq!(m.vega, 0.0);
        assert_eq!(m.theta, 0.0);
        assert_eq!(m.rho, 0.0);
    }

    #[test]
    fn test_scale() {
        let m = sample().scale(-2.0);
        assert_eq!(m.price, -20.0);
        assert_eq!(m.delta, -1.0);
        assert_eq!(m.theta, 12.8);
    }

    #[test]
    fn test_accumulate() {
        let mut total = OptionMetrics::zero();
        total.accumulate(&sample());
        total.accumulate(&sample());
        assert_eq!(total.price, 20.0);
        assert_eq!(total.delta, 1.0);
        assert_eq!(total.rho, 106.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(OptionMetrics::<f64>::default(), OptionMetrics::zero());
    }
}
