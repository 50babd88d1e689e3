//! CLI error types.

use desk_risk::book::BookError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value was not recognised.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine-side failure (validation, duplicate id, missing position).
    #[error(transparent)]
    Book(#[from] BookError),

    /// CSV parsing failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = CliError::FileNotFound("trades.csv".to_string());
        assert_eq!(format!("{}", err), "File not found: trades.csv");
    }

    #[test]
    fn test_book_error_converts_transparently() {
        let err: CliError = BookError::InvalidQuantity { quantity: 0 }.into();
        assert!(format!("{}", err).contains("quantity"));
    }
}
