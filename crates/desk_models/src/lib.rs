//! # Desk Models (M: Model Layer)
//!
//! Instrument definitions and closed-form analytical pricing for the
//! riskdesk engine.
//!
//! This crate provides:
//! - European option contracts with validated parameters
//! - Black-Scholes pricing with analytical Greeks
//! - Standard normal distribution functions
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            desk_models (M)              │
//! ├─────────────────────────────────────────┤
//! │  instruments/ - PayoffType,             │
//! │                 OptionContract          │
//! │  analytical/  - BlackScholes,           │
//! │                 OptionMetrics,          │
//! │                 norm_cdf / norm_pdf     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use desk_models::analytical::BlackScholes;
//! use desk_models::instruments::{OptionContract, PayoffType};
//!
//! let market = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
//! let call = OptionContract::new(PayoffType::Call, 100.0, 1.0).unwrap();
//!
//! let metrics = market.price_and_greeks(&call);
//! assert!((metrics.price - 10.4506).abs() < 1e-3);
//! assert!(metrics.delta > 0.0 && metrics.delta < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;

// Re-export commonly used types
pub use analytical::{norm_cdf, norm_pdf, AnalyticalError, BlackScholes, OptionMetrics};
pub use instruments::{InstrumentError, OptionContract, PayoffType};
