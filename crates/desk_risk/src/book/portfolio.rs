//! The portfolio book.

use std::collections::HashSet;

use super::error::BookError;
use super::ids::PositionId;
use super::market::MarketView;
use super::position::Position;
use super::snapshot::{BookSnapshot, PositionRow, RiskTotals};

/// Ordered collection of option positions.
///
/// Insertion order is preserved for deterministic display; identifiers
/// are unique within the book. All operations run to completion on the
/// caller's thread and mutate nothing outside the book itself —
/// `aggregate` is a pure read.
///
/// # Examples
/// ```
/// use desk_models::instruments::{OptionContract, PayoffType};
/// use desk_risk::book::{
///     EntryQuote, MarketView, Portfolio, Position, PositionIdSource, Side,
/// };
///
/// let mut ids = PositionIdSource::new();
/// let mut book = Portfolio::new();
///
/// let contract = OptionContract::new(PayoffType::Put, 95.0, 0.5).unwrap();
/// let entry = EntryQuote::new(100.0, 0.2, 0.01, 2.8).unwrap();
/// let put = Position::new(ids.next_id(), contract, Side::Sell, 3, entry).unwrap();
/// let id = put.id();
///
/// book.add(put).unwrap();
/// assert_eq!(book.len(), 1);
///
/// book.remove(id).unwrap();
/// assert!(book.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    positions: Vec<Position>,
    ids: HashSet<PositionId>,
}

impl Portfolio {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions in the book.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the book holds no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in insertion order.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Appends a position to the book.
    ///
    /// # Errors
    /// - `BookError::DuplicatePosition` if the identifier is already
    ///   present; the book is left unchanged.
    pub fn add(&mut self, position: Position) -> Result<(), BookError> {
        if !self.ids.insert(position.id()) {
            return Err(BookError::DuplicatePosition(position.id()));
        }
        self.positions.push(position);
        Ok(())
    }

    /// Removes the position with the given identifier and returns it.
    ///
    /// Surviving positions keep their identifiers and relative order.
    ///
    /// # Errors
    /// - `BookError::PositionNotFound` if no position has this
    ///   identifier; the book is left unchanged.
    pub fn remove(&mut self, id: PositionId) -> Result<Position, BookError> {
        if !self.ids.remove(&id) {
            return Err(BookError::PositionNotFound(id));
        }
        // Membership was just confirmed against the id set
        let index = self
            .positions
            .iter()
            .position(|p| p.id() == id)
            .ok_or(BookError::PositionNotFound(id))?;
        Ok(self.positions.remove(index))
    }

    /// Removes all positions unconditionally. Idempotent.
    pub fn flatten(&mut self) {
        self.positions.clear();
        self.ids.clear();
    }

    /// Revalues every position at the supplied market and returns the
    /// aggregated snapshot.
    ///
    /// Rows appear in insertion order; totals are simple scalar sums of
    /// the signed row contributions. Calling repeatedly with unchanged
    /// inputs yields identical output.
    pub fn aggregate(&self, market: &MarketView) -> Result<BookSnapshot, BookError> {
        let mut totals = RiskTotals::zero();
        let mut rows = Vec::with_capacity(self.positions.len());

        for position in &self.positions {
            let per_contract = position.metrics(market)?;
            let pnl = position.unrealized_pnl(per_contract.price);
            let greeks = per_contract.scale(position.signed_quantity());

            totals.accumulate(pnl, &greeks);
            rows.push(PositionRow {
                id: position.id(),
                price: per_contract.price,
                pnl,
                greeks,
            });
        }

        Ok(BookSnapshot { totals, rows })
    }
}
