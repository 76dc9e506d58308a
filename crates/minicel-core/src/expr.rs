//! Formula expression nodes and the arena that owns them
//!
//! Expression trees are stored flat: every node lives in one [`ExprArena`] and
//! children are referenced by [`ExprIndex`] rather than by pointer. The arena is
//! append-only, so an index handed out once stays valid for the arena's whole
//! lifetime, even when the backing storage is reallocated.

use crate::cell::CellAddress;
use std::fmt;

/// Initial number of node slots reserved by a new arena
pub const INITIAL_CAPACITY: usize = 128;

/// Handle to a node in an [`ExprArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprIndex(usize);

impl ExprIndex {
    /// Wrap a raw slot number
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw slot number
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ExprIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Formula expression node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Reference to another cell
    CellRef { row: usize, col: usize },
    /// Sum of two sub-expressions
    Add { lhs: ExprIndex, rhs: ExprIndex },
}

impl Expr {
    /// Reference node for the given address
    pub fn cell_ref(address: CellAddress) -> Self {
        Expr::CellRef {
            row: address.row,
            col: address.col,
        }
    }
}

impl Default for Expr {
    fn default() -> Self {
        Expr::Number(0.0)
    }
}

/// Append-only store of expression nodes
#[derive(Debug, Clone)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    /// Create an empty arena with [`INITIAL_CAPACITY`] slots reserved
    pub fn new() -> Self {
        Self {
            exprs: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append a node and return its index
    ///
    /// Storage grows geometrically, so allocation is amortized O(1).
    pub fn alloc(&mut self, expr: Expr) -> ExprIndex {
        let index = ExprIndex(self.exprs.len());
        self.exprs.push(expr);
        index
    }

    /// Append a default (`Number(0.0)`) node to be filled in through
    /// [`at_mut`](Self::at_mut)
    pub fn allocate(&mut self) -> ExprIndex {
        self.alloc(Expr::default())
    }

    /// Get a node
    ///
    /// # Panics
    ///
    /// Panics if `index` was not produced by this arena. Indices only come
    /// from [`alloc`](Self::alloc), so this is an internal bug, never bad input.
    pub fn at(&self, index: ExprIndex) -> &Expr {
        match self.exprs.get(index.0) {
            Some(expr) => expr,
            None => invalid_index(index, self.exprs.len()),
        }
    }

    /// Get a node mutably
    ///
    /// # Panics
    ///
    /// Same contract as [`at`](Self::at).
    pub fn at_mut(&mut self, index: ExprIndex) -> &mut Expr {
        let len = self.exprs.len();
        match self.exprs.get_mut(index.0) {
            Some(expr) => expr,
            None => invalid_index(index, len),
        }
    }

    /// Get a node without panicking
    pub fn get(&self, index: ExprIndex) -> Option<&Expr> {
        self.exprs.get(index.0)
    }

    /// Number of allocated nodes
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Check if no node has been allocated
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Render the tree rooted at `index` in canonical prefix form, e.g. `(+ 1 A0)`
    pub fn display(&self, index: ExprIndex) -> ExprDisplay<'_> {
        ExprDisplay { arena: self, index }
    }

    /// Render the tree rooted at `index` as an indented listing, one node per line
    ///
    /// ```text
    /// PLUS:
    ///   NUMBER: 1.000000
    ///   CELL(0, 1)
    /// ```
    pub fn dump(&self, index: ExprIndex) -> ExprDump<'_> {
        ExprDump {
            arena: self,
            index,
            level: 0,
        }
    }
}

impl Default for ExprArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[inline(never)]
fn invalid_index(index: ExprIndex, len: usize) -> ! {
    panic!("expression index {} out of range for arena of {} nodes", index, len)
}

/// Prefix-form view of an expression tree, see [`ExprArena::display`]
pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    index: ExprIndex,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.arena.at(self.index) {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::CellRef { row, col } => write!(f, "{}", CellAddress::new(row, col)),
            Expr::Add { lhs, rhs } => write!(
                f,
                "(+ {} {})",
                self.arena.display(lhs),
                self.arena.display(rhs)
            ),
        }
    }
}

/// Indented-listing view of an expression tree, see [`ExprArena::dump`]
pub struct ExprDump<'a> {
    arena: &'a ExprArena,
    index: ExprIndex,
    level: usize,
}

impl ExprDump<'_> {
    fn child(&self, index: ExprIndex) -> Self {
        ExprDump {
            arena: self.arena,
            index,
            level: self.level + 1,
        }
    }
}

impl fmt::Display for ExprDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.level * 2)?;

        match *self.arena.at(self.index) {
            Expr::Number(n) => writeln!(f, "NUMBER: {:.6}", n),
            Expr::CellRef { row, col } => writeln!(f, "CELL({}, {})", row, col),
            Expr::Add { lhs, rhs } => {
                writeln!(f, "PLUS:")?;
                write!(f, "{}{}", self.child(lhs), self.child(rhs))
            }
        }
    }
}
