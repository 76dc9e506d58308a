//! # minicel
//!
//! A tiny spreadsheet evaluator.
//!
//! Tables are pipe-delimited text. A field starting with `=` is a formula:
//! numbers and cell references (`A0`, `C12`) joined with `+`. Evaluation
//! resolves references on demand, caches every formula's value, and rejects
//! circular references.
//!
//! ## Example
//!
//! ```rust
//! use minicel::prelude::*;
//!
//! let mut sheet: Spreadsheet = "10|=A0+5\n=B0+A0|hello".parse().unwrap();
//! sheet.calculate().unwrap();
//!
//! let mut out = Vec::new();
//! sheet.write(&mut out, &CsvWriteOptions::default()).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "10.000000|15.000000\n25.000000|hello\n"
//! );
//! ```

pub mod calculation;
mod error;
pub mod prelude;
mod spreadsheet;

// Re-export calculation types
pub use calculation::{CalculationStats, TableCalculationExt};

pub use error::{Error, Result};
pub use spreadsheet::Spreadsheet;

// Re-export core types
pub use minicel_core::{
    Cell, CellAddress, EvalStatus, Expr, ExprArena, ExprIndex, FormulaCell, ResolvedValue, Table,
};

// Re-export formula types
pub use minicel_formula::{
    eval_cell, eval_expr, parse_formula, EvalStats, Evaluator, FormulaError, FormulaResult,
};

// Re-export I/O types
pub use minicel_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
