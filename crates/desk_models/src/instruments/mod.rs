//! Instrument definitions.
//!
//! This module provides the European option contract types consumed by
//! the analytical pricing model:
//! - [`PayoffType`]: call or put
//! - [`OptionContract`]: validated strike and expiry
//! - [`InstrumentError`]: validation failures

mod contract;
mod error;
mod payoff;

pub use contract::OptionContract;
pub use error::InstrumentError;
pub use payoff::PayoffType;
