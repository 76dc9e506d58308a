//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - The contents of a table slot
//! - [`EvalStatus`] - Memoization state of a formula cell
//! - [`CellAddress`] - A cell's location (e.g., "B3")

mod address;
mod value;

pub use address::CellAddress;
pub use value::{Cell, EvalStatus, FormulaCell, ResolvedValue};
