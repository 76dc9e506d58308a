//! Table calculation
//!
//! Evaluates every formula cell of a table in row-major order. Dependencies
//! are resolved on demand by the evaluator, so no calculation order has to be
//! computed up front.
//!
//! # Example
//!
//! ```rust
//! use minicel::prelude::*;
//!
//! let mut arena = ExprArena::new();
//! let mut table = Table::new(1, 2);
//! table.set_cell(0, 0, 10.0).unwrap();
//! let root = minicel::parse_formula("=A0+5", &mut arena).unwrap();
//! table.set_cell(0, 1, Cell::formula(root)).unwrap();
//!
//! let stats = table.calculate(&arena).unwrap();
//! assert_eq!(stats.cells_calculated, 1);
//! assert_eq!(table.cell(0, 1).unwrap().as_number(), Some(15.0));
//! ```

use minicel_core::{ExprArena, Table};
use minicel_formula::{EvalStats, Evaluator, FormulaResult};

/// Statistics from a calculation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculationStats {
    /// Total number of formula cells in the table
    pub formula_count: usize,
    /// Number of formula cells whose expression was computed
    pub cells_calculated: usize,
    /// Number of expression nodes visited
    pub exprs_evaluated: usize,
}

impl CalculationStats {
    fn new(formula_count: usize, eval: EvalStats) -> Self {
        Self {
            formula_count,
            cells_calculated: eval.cells_evaluated,
            exprs_evaluated: eval.exprs_evaluated,
        }
    }
}

/// Extension trait for [`Table`] to add calculation
pub trait TableCalculationExt {
    /// Evaluate every formula cell, caching results in place
    ///
    /// Stops at the first error. Cells evaluated before the error keep their
    /// cached values.
    fn calculate(&mut self, arena: &ExprArena) -> FormulaResult<CalculationStats>;
}

impl TableCalculationExt for Table {
    fn calculate(&mut self, arena: &ExprArena) -> FormulaResult<CalculationStats> {
        let formula_count = self.formula_cells().count();

        let mut evaluator = Evaluator::new(self, arena);
        evaluator.eval_all()?;
        let stats = CalculationStats::new(formula_count, evaluator.stats());

        tracing::debug!(
            formulas = stats.formula_count,
            calculated = stats.cells_calculated,
            exprs = stats.exprs_evaluated,
            "calculation finished"
        );
        Ok(stats)
    }
}
