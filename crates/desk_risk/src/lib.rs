//! # Desk Risk (R: Risk Layer)
//!
//! Option positions, the portfolio book, and risk aggregation for the
//! riskdesk engine.
//!
//! This crate provides:
//! - Immutable option positions with entry terms and P&L
//! - An ordered, identifier-keyed portfolio book
//! - Aggregated risk snapshots (totals plus per-position rows)
//! - Spot-grid P&L/Greek curves for graph rendering
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             desk_risk (R)               │
//! ├─────────────────────────────────────────┤
//! │  book/    - Position, Portfolio,        │
//! │             PositionId, MarketView,     │
//! │             BookSnapshot                │
//! │  curves/  - SpotGrid, RiskCurves        │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            desk_models (M)              │
//! │  Black-Scholes pricing + Greeks         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! All operations are synchronous and run on the caller's thread; the
//! book is owned state mutated only through its own methods.
//!
//! ## Example
//!
//! ```
//! use desk_models::instruments::{OptionContract, PayoffType};
//! use desk_risk::book::{
//!     EntryQuote, MarketView, Portfolio, Position, PositionIdSource, Side,
//! };
//!
//! let mut ids = PositionIdSource::new();
//! let mut book = Portfolio::new();
//!
//! let contract = OptionContract::new(PayoffType::Call, 100.0, 1.0).unwrap();
//! let entry = EntryQuote::new(100.0, 0.2, 0.05, 10.45).unwrap();
//! let position = Position::new(ids.next_id(), contract, Side::Buy, 1, entry).unwrap();
//!
//! book.add(position).unwrap();
//!
//! let market = MarketView::new(100.0, 0.2, 0.05).unwrap();
//! let snapshot = book.aggregate(&market).unwrap();
//! assert_eq!(snapshot.rows.len(), 1);
//! assert!((snapshot.totals.pnl - 0.0006).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod book;
pub mod curves;

// Re-export commonly used types
pub use book::{
    BookError, BookSnapshot, EntryQuote, MarketView, Portfolio, Position, PositionId,
    PositionIdSource, PositionRow, RiskTotals, Side,
};
pub use curves::{RiskCurves, SpotGrid};
