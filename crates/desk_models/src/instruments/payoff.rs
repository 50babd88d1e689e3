//! Payoff type definitions.

use num_traits::Float;
use std::fmt;

/// Payoff type of a European option.
///
/// # Examples
/// ```
/// use desk_models::instruments::PayoffType;
///
/// let call = PayoffType::Call;
/// assert!(call.is_call());
/// assert_eq!(format!("{}", call), "Call");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl PayoffType {
    /// Returns true for a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns true for a put.
    #[inline]
    pub fn is_put(self) -> bool {
        matches!(self, PayoffType::Put)
    }

    /// Intrinsic value at a given spot.
    ///
    /// `max(S - K, 0)` for a call, `max(K - S, 0)` for a put.
    ///
    /// # Examples
    /// ```
    /// use desk_models::instruments::PayoffType;
    ///
    /// assert_eq!(PayoffType::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(PayoffType::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic<T: Float>(self, spot: T, strike: T) -> T {
        let zero = T::zero();
        let moneyness = match self {
            PayoffType::Call => spot - strike,
            PayoffType::Put => strike - spot,
        };
        if moneyness > zero {
            moneyness
        } else {
            zero
        }
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffType::Call => write!(f, "Call"),
            PayoffType::Put => write!(f, "Put"),
        }
    }
}
