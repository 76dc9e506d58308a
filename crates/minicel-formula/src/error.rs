//! Formula error types

use minicel_core::CellAddress;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormulaError {
    /// A character that cannot start a token
    #[error("Unknown token starts with '{0}'")]
    UnknownToken(char),

    /// Input ended where an expression was expected
    #[error("Expected an expression, found end of input")]
    UnexpectedEnd,

    /// Formula text without the leading `=`
    #[error("Unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },

    /// A name token that is neither a number nor a well-formed cell reference
    #[error("Invalid reference: {0}")]
    InvalidReference(minicel_core::Error),

    /// A text cell used as an operand
    #[error("Text cell {0} may not participate in math expressions")]
    TextInArithmetic(CellAddress),

    /// Circular reference
    #[error("Circular reference detected involving cell {0}")]
    CircularReference(CellAddress),

    /// Reference to a cell outside the table, or another table-level error
    #[error(transparent)]
    Core(#[from] minicel_core::Error),
}

impl FormulaError {
    /// Whether this error is raised while parsing, as opposed to evaluating
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            FormulaError::UnknownToken(_)
                | FormulaError::UnexpectedEnd
                | FormulaError::UnexpectedToken { .. }
                | FormulaError::InvalidReference(_)
        )
    }
}
