//! # minicel-core
//!
//! Core data structures for the minicel spreadsheet evaluator.
//!
//! This crate provides the fundamental types used throughout minicel:
//! - [`Expr`] and [`ExprArena`] - Formula expression nodes and the arena that owns them
//! - [`Cell`] and [`EvalStatus`] - Cell contents and per-formula memoization state
//! - [`CellAddress`] - Zero-based (row, column) cell coordinates
//! - [`Table`] - The fixed-size grid of cells
//!
//! ## Example
//!
//! ```rust
//! use minicel_core::{Cell, Expr, ExprArena, Table};
//!
//! let mut arena = ExprArena::new();
//! let one = arena.alloc(Expr::Number(1.0));
//! let a0 = arena.alloc(Expr::CellRef { row: 0, col: 0 });
//! let sum = arena.alloc(Expr::Add { lhs: a0, rhs: one });
//!
//! let mut table = Table::new(1, 2);
//! table.set_cell(0, 0, Cell::Number(41.0)).unwrap();
//! table.set_cell(0, 1, Cell::formula(sum)).unwrap();
//!
//! assert_eq!(arena.display(sum).to_string(), "(+ A0 1)");
//! ```

pub mod cell;
pub mod error;
pub mod expr;
pub mod table;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, EvalStatus, FormulaCell, ResolvedValue};
pub use error::{Error, Result};
pub use expr::{Expr, ExprArena, ExprDisplay, ExprDump, ExprIndex};
pub use table::Table;
