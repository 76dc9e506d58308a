//! # minicel-formula
//!
//! Formula parser and evaluator for minicel.
//!
//! This crate provides:
//! - Formula parsing (text → expression nodes in an [`ExprArena`](minicel_core::ExprArena))
//! - Lazy, memoized cell evaluation with circular reference detection
//!
//! ## Example
//!
//! ```rust
//! use minicel_core::{Cell, ExprArena, Table};
//! use minicel_formula::{eval_cell, parse_formula};
//!
//! let mut arena = ExprArena::new();
//! let mut table = Table::new(1, 2);
//! table.set_cell(0, 0, 10.0).unwrap();
//! table.set_cell(0, 1, Cell::formula(parse_formula("=A0+5", &mut arena).unwrap())).unwrap();
//!
//! eval_cell(&mut table, &arena, 0, 1).unwrap();
//! assert_eq!(table.cell(0, 1).unwrap().as_number(), Some(15.0));
//! ```

pub mod error;
pub mod evaluator;
pub mod parser;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::{eval_cell, eval_expr, EvalStats, Evaluator};
pub use parser::{next_token, parse_expr, parse_formula, parse_number, Token};
