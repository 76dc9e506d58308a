//! CSV error types

use minicel_formula::FormulaError;
use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed formula in a cell
    #[error("Parse error at row {row}, column {column}: {source}")]
    Formula {
        row: usize,
        column: usize,
        #[source]
        source: FormulaError,
    },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] minicel_core::Error),
}
