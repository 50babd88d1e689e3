//! European option contract terms.

use num_traits::Float;

use super::error::InstrumentError;
use super::payoff::PayoffType;

/// European option contract terms with validation.
///
/// Combines payoff type, strike price, and time to expiry. Validation
/// ensures the strike is positive and the expiry non-negative; an expiry
/// of exactly zero is a defined boundary (the option is at maturity),
/// not an error.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use desk_models::instruments::{OptionContract, PayoffType};
///
/// let call = OptionContract::new(PayoffType::Call, 100.0_f64, 1.0).unwrap();
/// assert_eq!(call.strike(), 100.0);
/// assert_eq!(call.expiry(), 1.0);
///
/// // Invalid strike
/// assert!(OptionContract::new(PayoffType::Call, -100.0_f64, 1.0).is_err());
///
/// // Zero expiry is a valid boundary
/// assert!(OptionContract::new(PayoffType::Put, 100.0_f64, 0.0).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract<T: Float> {
    payoff_type: PayoffType,
    strike: T,
    expiry: T,
}

impl<T: Float> OptionContract<T> {
    /// Creates a new option contract with validation.
    ///
    /// # Arguments
    /// * `payoff_type` - Call or put
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    ///
    /// # Errors
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    /// - `InstrumentError::InvalidExpiry` if expiry < 0
    pub fn new(payoff_type: PayoffType, strike: T, expiry: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if expiry < zero {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            payoff_type,
            strike,
            expiry,
        })
    }

    /// Returns the payoff type.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Intrinsic value of the contract at a given spot.
    #[inline]
    pub fn intrinsic(&self, spot: T) -> T {
        self.payoff_type.intrinsic(spot, self.strike)
    }
}
