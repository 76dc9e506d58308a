//! Formula evaluator
//!
//! Evaluates formula cells on demand. Cell dependencies are never collected
//! into a graph: they are discovered while walking expressions, and each
//! formula cell's [`EvalStatus`] serves both as the memoization flag and as
//! the cycle guard.

use crate::error::{FormulaError, FormulaResult};
use minicel_core::{
    Cell, CellAddress, EvalStatus, Expr, ExprArena, ExprIndex, FormulaCell, Table,
};

/// Counters collected while evaluating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Formula cells whose expression was computed
    pub cells_evaluated: usize,
    /// Expression nodes visited
    pub exprs_evaluated: usize,
}

/// Evaluate the formula cell at (`row`, `col`), caching its value in the table
///
/// Non-formula cells are left alone.
pub fn eval_cell(
    table: &mut Table,
    arena: &ExprArena,
    row: usize,
    col: usize,
) -> FormulaResult<()> {
    Evaluator::new(table, arena).eval_cell(row, col)
}

/// Evaluate a single expression against the table
pub fn eval_expr(table: &mut Table, arena: &ExprArena, index: ExprIndex) -> FormulaResult<f64> {
    Evaluator::new(table, arena).eval_expr(index)
}

/// Borrows a table and the arena holding its formulas for the duration of an
/// evaluation pass
pub struct Evaluator<'a> {
    table: &'a mut Table,
    arena: &'a ExprArena,
    stats: EvalStats,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator
    pub fn new(table: &'a mut Table, arena: &'a ExprArena) -> Self {
        Self {
            table,
            arena,
            stats: EvalStats::default(),
        }
    }

    /// Counters collected so far
    pub fn stats(&self) -> EvalStats {
        self.stats
    }

    /// Evaluate every cell in row-major order
    ///
    /// Stops at the first error; the visiting order decides which error is
    /// reported when several exist.
    pub fn eval_all(&mut self) -> FormulaResult<()> {
        for address in self.table.addresses() {
            self.eval_cell(address.row, address.col)?;
        }
        Ok(())
    }

    /// Evaluate the formula cell at (`row`, `col`)
    ///
    /// Does nothing for text and number cells or for formulas that have
    /// already been evaluated.
    pub fn eval_cell(&mut self, row: usize, col: usize) -> FormulaResult<()> {
        let formula = match self.table.cell(row, col)? {
            Cell::Formula(formula) => *formula,
            Cell::Text(_) | Cell::Number(_) => return Ok(()),
        };

        self.eval_formula(CellAddress::new(row, col), formula)?;
        Ok(())
    }

    /// Evaluate an expression node
    pub fn eval_expr(&mut self, index: ExprIndex) -> FormulaResult<f64> {
        self.stats.exprs_evaluated += 1;

        match *self.arena.at(index) {
            Expr::Number(n) => Ok(n),
            Expr::CellRef { row, col } => {
                let address = CellAddress::new(row, col);
                let formula = match self.table.cell_at(address)? {
                    Cell::Number(n) => return Ok(*n),
                    Cell::Text(_) => return Err(FormulaError::TextInArithmetic(address)),
                    Cell::Formula(formula) => *formula,
                };
                self.eval_formula(address, formula)
            }
            Expr::Add { lhs, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                Ok(lhs + rhs)
            }
        }
    }

    fn eval_formula(&mut self, address: CellAddress, formula: FormulaCell) -> FormulaResult<f64> {
        match formula.status {
            EvalStatus::Evaluated => Ok(formula.cached),
            EvalStatus::InProgress => Err(FormulaError::CircularReference(address)),
            EvalStatus::Unevaluated => {
                self.update(address, |cell| cell.status = EvalStatus::InProgress)?;

                let value = match self.eval_expr(formula.expr) {
                    Ok(value) => value,
                    Err(err) => {
                        // No cell may stay InProgress once the pass has failed
                        self.update(address, |cell| cell.status = EvalStatus::Unevaluated)?;
                        return Err(err);
                    }
                };

                self.update(address, |cell| {
                    cell.cached = value;
                    cell.status = EvalStatus::Evaluated;
                })?;
                self.stats.cells_evaluated += 1;

                tracing::debug!(cell = %address, value, "evaluated formula");
                Ok(value)
            }
        }
    }

    fn update(
        &mut self,
        address: CellAddress,
        f: impl FnOnce(&mut FormulaCell),
    ) -> FormulaResult<()> {
        if let Cell::Formula(formula) = self.table.cell_mut(address.row, address.col)? {
            f(formula);
        }
        Ok(())
    }
}
