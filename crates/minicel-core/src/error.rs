//! Error types for minicel-core

use crate::cell::CellAddress;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in minicel-core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Coordinate outside the table bounds
    #[error("Cell {address} is out of bounds (table is {rows} rows x {cols} columns)")]
    CellOutOfBounds {
        address: CellAddress,
        rows: usize,
        cols: usize,
    },

    /// Malformed cell address text
    #[error("Invalid cell address '{text}': {reason}")]
    InvalidAddress { text: String, reason: &'static str },
}

impl Error {
    pub(crate) fn invalid_address<S: Into<String>>(text: S, reason: &'static str) -> Self {
        Error::InvalidAddress {
            text: text.into(),
            reason,
        }
    }
}
