//! The portfolio book: positions, identifiers, market inputs, and
//! aggregation.
//!
//! - [`Position`]: one immutable option trade
//! - [`PositionId`] / [`PositionIdSource`]: identity for removal
//! - [`MarketView`]: validated live market inputs
//! - [`Portfolio`]: ordered collection with add/remove/flatten/aggregate
//! - [`BookSnapshot`]: aggregation output (totals + per-position rows)

mod error;
mod ids;
mod market;
mod portfolio;
mod position;
mod snapshot;

pub use error::BookError;
pub use ids::{PositionId, PositionIdSource};
pub use market::MarketView;
pub use portfolio::Portfolio;
pub use position::{EntryQuote, Position, Side};
pub use snapshot::{BookSnapshot, PositionRow, RiskTotals};
