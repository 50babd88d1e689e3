//! CLI command implementations
//!
//! Each submodule implements a specific CLI command; `loader` holds the
//! shared trade-CSV parsing.

pub mod book;
pub mod curves;
pub mod loader;
pub mod price;
