//! Facade error type

use thiserror::Error;

/// Result type for minicel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Any error produced while loading, evaluating or writing a spreadsheet
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the table failed
    #[error(transparent)]
    Csv(#[from] minicel_csv::CsvError),

    /// Evaluating a formula failed
    #[error(transparent)]
    Formula(#[from] minicel_formula::FormulaError),

    /// IO error outside of table reading and writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
