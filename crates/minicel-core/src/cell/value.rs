//! Cell contents and formula memoization state

use crate::expr::ExprIndex;
use std::fmt;

/// Evaluation state of a formula cell
///
/// Doubles as the cycle guard: a cell is `InProgress` only while its own
/// expression is being evaluated, so meeting it again in that state means the
/// current evaluation path loops back on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalStatus {
    /// Not evaluated yet
    #[default]
    Unevaluated,
    /// Currently being evaluated further up the call stack
    InProgress,
    /// Evaluated; the cached value is final
    Evaluated,
}

/// A formula cell: parsed expression plus memoized result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaCell {
    /// Root of the parsed expression in the shared arena
    pub expr: ExprIndex,
    /// Memoization state
    pub status: EvalStatus,
    /// Computed value, meaningful once `status` is `Evaluated`
    pub cached: f64,
}

impl FormulaCell {
    /// Create an unevaluated formula cell
    pub fn new(expr: ExprIndex) -> Self {
        Self {
            expr,
            status: EvalStatus::Unevaluated,
            cached: 0.0,
        }
    }

    /// The computed value, if evaluation has finished
    pub fn value(&self) -> Option<f64> {
        match self.status {
            EvalStatus::Evaluated => Some(self.cached),
            EvalStatus::Unevaluated | EvalStatus::InProgress => None,
        }
    }
}

/// Represents the contents of a single table slot
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Literal text (also used for empty slots)
    Text(String),

    /// Numeric literal
    Number(f64),

    /// Formula (text after the leading `=`, already parsed)
    Formula(FormulaCell),
}

impl Cell {
    /// Create a new text cell
    pub fn text<S: Into<String>>(s: S) -> Self {
        Cell::Text(s.into())
    }

    /// Create a new, unevaluated formula cell
    pub fn formula(expr: ExprIndex) -> Self {
        Cell::Formula(FormulaCell::new(expr))
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, Cell::Formula(_))
    }

    /// Get the formula state, if this is a formula cell
    pub fn as_formula(&self) -> Option<&FormulaCell> {
        match self {
            Cell::Formula(formula) => Some(formula),
            _ => None,
        }
    }

    /// Get the numeric value, if any
    ///
    /// Formula cells only have one after they have been evaluated.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Formula(formula) => formula.value(),
            Cell::Text(_) => None,
        }
    }

    /// The value handed to the output stage
    pub fn resolved(&self) -> ResolvedValue<'_> {
        match self {
            Cell::Text(s) => ResolvedValue::Text(s),
            Cell::Number(n) => ResolvedValue::Number(*n),
            Cell::Formula(formula) => match formula.value() {
                Some(n) => ResolvedValue::Number(n),
                None => ResolvedValue::Pending,
            },
        }
    }

    /// Get the type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Text(_) => "TEXT",
            Cell::Number(_) => "NUMBER",
            Cell::Formula(_) => "EXPR",
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Text(String::new())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::text(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// A cell's final representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedValue<'a> {
    /// Original text of a text cell
    Text(&'a str),
    /// Stored number, or computed value of an evaluated formula
    Number(f64),
    /// Formula that has not been evaluated
    Pending,
}

impl fmt::Display for ResolvedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::Text(s) => f.write_str(s),
            ResolvedValue::Number(n) => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, n),
                None => write!(f, "{}", n),
            },
            ResolvedValue::Pending => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_text() {
        assert_eq!(Cell::default(), Cell::Text(String::new()));
        assert_eq!(Cell::default().resolved(), ResolvedValue::Text(""));
    }

    #[test]
    fn test_formula_starts_unevaluated() {
        let cell = Cell::formula(ExprIndex::new(3));
        let formula = cell.as_formula().unwrap();
        assert_eq!(formula.status, EvalStatus::Unevaluated);
        assert_eq!(formula.value(), None);
        assert_eq!(cell.as_number(), None);
        assert_eq!(cell.resolved(), ResolvedValue::Pending);
    }

    #[test]
    fn test_evaluated_formula_resolves_to_cache() {
        let cell = Cell::Formula(FormulaCell {
            expr: ExprIndex::new(0),
            status: EvalStatus::Evaluated,
            cached: 2.5,
        });
        assert_eq!(cell.as_number(), Some(2.5));
        assert_eq!(cell.resolved(), ResolvedValue::Number(2.5));
    }

    #[test]
    fn test_resolved_display_precision() {
        assert_eq!(format!("{:.6}", ResolvedValue::Number(15.0)), "15.000000");
        assert_eq!(format!("{}", ResolvedValue::Number(1.5)), "1.5");
        assert_eq!(format!("{:.6}", ResolvedValue::Text("hi")), "hi");
        assert_eq!(format!("{:.6}", ResolvedValue::Pending), "");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Cell::from("x").type_name(), "TEXT");
        assert_eq!(Cell::from(1.0).type_name(), "NUMBER");
        assert_eq!(Cell::formula(ExprIndex::new(0)).type_name(), "EXPR");
    }
}
