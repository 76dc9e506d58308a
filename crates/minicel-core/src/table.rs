//! Table type

use crate::cell::{Cell, CellAddress, FormulaCell};
use crate::error::{Error, Result};

/// A fixed-size grid of cells, stored row-major
///
/// The size is chosen once, before the table is populated, and never changes.
/// Every slot starts out as empty text.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Table {
    /// Create a `rows` x `cols` table of empty text cells
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, Cell::default);
        Self { cells, rows, cols }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if the table has no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether an address lies inside the table
    pub fn contains(&self, address: CellAddress) -> bool {
        address.row < self.rows && address.col < self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(Error::CellOutOfBounds {
                address: CellAddress::new(row, col),
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let offset = self.offset(row, col)?;
        Ok(&self.cells[offset])
    }

    /// Get a mutable cell by row and column indices
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.cells[offset])
    }

    /// Get a cell by address
    pub fn cell_at(&self, address: CellAddress) -> Result<&Cell> {
        self.cell(address.row, address.col)
    }

    /// Replace the contents of a cell
    pub fn set_cell(&mut self, row: usize, col: usize, cell: impl Into<Cell>) -> Result<()> {
        *self.cell_mut(row, col)? = cell.into();
        Ok(())
    }

    // === Iteration ===

    /// Iterate over every address in row-major order
    ///
    /// The iterator does not borrow the table, so cells can be mutated while
    /// walking it.
    pub fn addresses(&self) -> impl Iterator<Item = CellAddress> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| CellAddress::new(row, col)))
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> {
        self.addresses().zip(self.cells.iter())
    }

    /// Get the cells of one row
    pub fn row(&self, row: usize) -> Result<&[Cell]> {
        if row >= self.rows {
            return Err(Error::CellOutOfBounds {
                address: CellAddress::new(row, 0),
                rows: self.rows,
                cols: self.cols,
            });
        }

        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Iterate over formula cells in row-major order
    pub fn formula_cells(&self) -> impl Iterator<Item = (CellAddress, &FormulaCell)> {
        self.cells()
            .filter_map(|(address, cell)| cell.as_formula().map(|formula| (address, formula)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprIndex;

    #[test]
    fn test_new_table_is_empty_text() {
        let table = Table::new(2, 3);
        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 3);
        assert!(table.cells().all(|(_, cell)| *cell == Cell::default()));
    }

    #[test]
    fn test_set_and_get() {
        let mut table = Table::new(2, 2);
        table.set_cell(1, 0, 4.5).unwrap();
        table.set_cell(0, 1, "hello").unwrap();

        assert_eq!(table.cell(1, 0).unwrap(), &Cell::Number(4.5));
        assert_eq!(table.cell_at(CellAddress::new(0, 1)).unwrap(), &Cell::text("hello"));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut table = Table::new(2, 2);
        assert_eq!(
            table.cell(2, 0).unwrap_err(),
            Error::CellOutOfBounds {
                address: CellAddress::new(2, 0),
                rows: 2,
                cols: 2,
            }
        );
        assert!(table.cell(0, 2).is_err());
        assert!(table.set_cell(5, 5, 1.0).is_err());
        assert!(!table.contains(CellAddress::new(0, 2)));
        assert!(table.contains(CellAddress::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let table = Table::new(1, 1);
        assert_eq!(
            table.cell(0, 3).unwrap_err().to_string(),
            "Cell D0 is out of bounds (table is 1 rows x 1 columns)"
        );
    }

    #[test]
    fn test_row_major_order() {
        let mut table = Table::new(2, 2);
        table.set_cell(0, 1, 1.0).unwrap();
        table.set_cell(1, 0, 2.0).unwrap();

        let addresses: Vec<_> = table.addresses().map(|a| a.to_string()).collect();
        assert_eq!(addresses, ["A0", "B0", "A1", "B1"]);

        let numbers: Vec<_> = table.cells().filter_map(|(_, c)| c.as_number()).collect();
        assert_eq!(numbers, [1.0, 2.0]);
    }

    #[test]
    fn test_row_slice() {
        let mut table = Table::new(2, 3);
        table.set_cell(1, 2, 7.0).unwrap();
        let row = table.row(1).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[2], Cell::Number(7.0));
        assert!(table.row(2).is_err());

        let narrow = Table::new(2, 0);
        assert!(narrow.row(1).unwrap().is_empty());
    }

    #[test]
    fn test_formula_cells() {
        let mut table = Table::new(1, 3);
        table.set_cell(0, 2, Cell::formula(ExprIndex::new(0))).unwrap();
        let formulas: Vec<_> = table.formula_cells().map(|(a, _)| a).collect();
        assert_eq!(formulas, [CellAddress::new(0, 2)]);
    }
}
