//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::metrics::OptionMetrics;
use crate::instruments::{OptionContract, PayoffType};

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility) and provides
/// closed-form pricing and Greeks for any strike/expiry. All methods are
/// pure and deterministic for identical inputs.
///
/// Boundary policy: at zero expiry or zero volatility the d₁/d₂ terms
/// are degenerate, so the price collapses to intrinsic value, delta is
/// ±1 strictly in the money and 0 otherwise (the exact at-the-money tie
/// counts as out of the money), and gamma/vega/theta/rho are 0. No input
/// in the valid range ever produces NaN or infinity.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use desk_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (must be non-negative; zero volatility
    ///   is a defined boundary, not an error)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0
    ///
    /// # Examples
    /// ```
    /// use desk_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    ///
    /// // Zero volatility is a valid boundary
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility < zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// True when the d₁/d₂ terms are degenerate (expiry or volatility
    /// at zero) and the option collapses to intrinsic value.
    #[inline]
    fn is_degenerate(&self, expiry: T) -> bool {
        let epsilon = T::from(1e-10).unwrap();
        expiry <= epsilon || self.volatility <= epsilon
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Returns large positive/negative values for degenerate inputs so
    /// that N(d₁) saturates at 1/0 in the limiting cases.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();

        if self.is_degenerate(expiry) {
            let large = T::from(100.0).unwrap();
            if self.spot > strike {
                return large;
            } else if self.spot < strike {
                return -large;
            } else {
                return zero;
            }
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return self.d1(strike, expiry);
        }

        let sqrt_t = expiry.sqrt();
        self.d1(strike, expiry) - self.volatility * sqrt_t
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use desk_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    /// assert!(price > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return PayoffType::Call.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// # Examples
    /// ```
    /// use desk_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    /// assert!(price > 0.0);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return PayoffType::Put.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a call or put.
    #[inline]
    pub fn price(&self, strike: T, expiry: T, payoff: PayoffType) -> T {
        match payoff {
            PayoffType::Call => self.price_call(strike, expiry),
            PayoffType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    ///
    /// At the degenerate boundary, delta is ±1 strictly in the money and
    /// 0 otherwise; the exact at-the-money tie resolves to 0.
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, payoff: PayoffType) -> T {
        if self.is_degenerate(expiry) {
            let one = T::one();
            let zero = T::zero();
            return match payoff {
                PayoffType::Call => {
                    if self.spot > strike {
                        one
                    } else {
                        zero
                    }
                }
                PayoffType::Put => {
                    if self.spot < strike {
                        -one
                    } else {
                        zero
                    }
                }
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));

        match payoff {
            PayoffType::Call => n_d1,
            PayoffType::Put => n_d1 - T::one(),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        norm_pdf(d1) / (self.spot * self.volatility * sqrt_t)
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts. Reported per
    /// unit of volatility (a 1% vol move contributes vega / 100).
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        self.spot * sqrt_t * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Typically negative for a long option (time decay).
    #[inline]
    pub fn theta(&self, strike: T, expiry: T, payoff: PayoffType) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();
        let two = T::from(2.0).unwrap();

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (two * sqrt_t);

        match payoff {
            PayoffType::Call => decay - self.rate * strike * discount * norm_cdf(d2),
            PayoffType::Put => decay + self.rate * strike * discount * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: T, expiry: T, payoff: PayoffType) -> T {
        if self.is_degenerate(expiry) {
            return T::zero();
        }

        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        match payoff {
            PayoffType::Call => strike * expiry * discount * norm_cdf(d2),
            PayoffType::Put => -strike * expiry * discount * norm_cdf(-d2),
        }
    }

    /// Computes price and all five Greeks for a contract in one call.
    ///
    /// Pure function of the model state and the contract; repeated calls
    /// with identical inputs yield identical output.
    ///
    /// # Examples
    /// ```
    /// use desk_models::analytical::BlackScholes;
    /// use desk_models::instruments::{OptionContract, PayoffType};
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let call = OptionContract::new(PayoffType::Call, 100.0, 1.0).unwrap();
    ///
    /// let m = bs.price_and_greeks(&call);
    /// assert!((m.price - 10.4506).abs() < 1e-3);
    /// assert!((m.delta - 0.6368).abs() < 1e-3);
    /// ```
    pub fn price_and_greeks(&self, contract: &OptionContract<T>) -> OptionMetrics<T> {
        let strike = contract.strike();
        let expiry = contract.expiry();
        let payoff = contract.payoff_type();

        OptionMetrics {
            price: self.price(strike, expiry, payoff),
            delta: self.delta(strike, expiry, payoff),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, payoff),
            rho: self.rho(strike, expiry, payoff),
        }
    }
}
