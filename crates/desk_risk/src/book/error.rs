//! Book error types.

use desk_models::analytical::AnalyticalError;
use desk_models::instruments::InstrumentError;
use thiserror::Error;

use super::ids::PositionId;

/// Errors that can occur during book operations.
///
/// Validation failures surface at position creation or market-view
/// construction. Nothing is retried or swallowed; every error
/// propagates to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// Position quantity must be a positive number of contracts.
    #[error("Invalid quantity: {quantity} (must be positive)")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// Entry spot price must be positive.
    #[error("Invalid entry spot: S = {spot}")]
    InvalidEntrySpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Entry volatility must be non-negative.
    #[error("Invalid entry volatility: sigma = {volatility}")]
    InvalidEntryVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Duplicate position ID encountered on add.
    #[error("Duplicate position ID: {0}")]
    DuplicatePosition(PositionId),

    /// Position not found on removal.
    #[error("Position not found: {0}")]
    PositionNotFound(PositionId),

    /// Invalid contract terms.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Invalid market inputs.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_quantity_display() {
        let err = BookError::InvalidQuantity { quantity: 0 };
        assert_eq!(format!("{}", err), "Invalid quantity: 0 (must be positive)");
    }

    #[test]
    fn test_duplicate_position_display() {
        let err = BookError::DuplicatePosition(PositionId::new(7));
        assert_eq!(format!("{}", err), "Duplicate position ID: 7");
    }

    #[test]
    fn test_position_not_found_display() {
        let err = BookError::PositionNotFound(PositionId::new(3));
        assert_eq!(format!("{}", err), "Position not found: 3");
    }

    #[test]
    fn test_instrument_error_converts() {
        let err: BookError = InstrumentError::InvalidStrike { strike: -1.0 }.into();
        assert!(matches!(err, BookError::Instrument(_)));
        assert!(format!("{}", err).contains("strike"));
    }

    #[test]
    fn test_analytical_error_converts() {
        let err: BookError = AnalyticalError::InvalidSpot { spot: -1.0 }.into();
        assert!(matches!(err, BookError::Analytical(_)));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err: Box<dyn std::error::Error> =
            Box::new(BookError::PositionNotFound(PositionId::new(1)));
        assert!(err.to_string().contains("not found"));
    }
}
