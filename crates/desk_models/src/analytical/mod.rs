//! Analytical pricing models.
//!
//! This module provides closed-form pricing for European options:
//! - [`BlackScholes`]: pricing and analytical Greeks
//! - [`OptionMetrics`]: price plus the five first-order sensitivities
//! - [`distributions`]: standard normal CDF/PDF
//! - [`AnalyticalError`]: input validation failures

pub mod distributions;

mod black_scholes;
mod error;
mod metrics;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use metrics::OptionMetrics;
