//! Spreadsheet: a table together with the arena holding its formulas

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::calculation::{CalculationStats, TableCalculationExt};
use crate::error::{Error, Result};
use minicel_core::{ExprArena, Table};
use minicel_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};

/// A loaded spreadsheet
///
/// Owns the cell table and the expression arena its formula cells point
/// into. The two are always created together, so every formula index in the
/// table is valid for the arena.
#[derive(Debug, Clone)]
pub struct Spreadsheet {
    table: Table,
    arena: ExprArena,
}

impl Spreadsheet {
    /// Open a spreadsheet file with default options
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, &CsvReadOptions::default())
    }

    /// Open a spreadsheet file
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening spreadsheet");
        let file = File::open(path)?;
        Self::read(BufReader::new(file), options)
    }

    /// Read a spreadsheet from a reader
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> Result<Self> {
        let mut arena = ExprArena::new();
        let table = CsvReader::read(reader, options, &mut arena)?;
        Ok(Self { table, arena })
    }

    /// Evaluate every formula cell
    pub fn calculate(&mut self) -> Result<CalculationStats> {
        Ok(self.table.calculate(&self.arena)?)
    }

    /// Write the table to a writer
    pub fn write<W: Write>(&self, writer: W, options: &CsvWriteOptions) -> Result<()> {
        CsvWriter::write(&self.table, writer, options)?;
        Ok(())
    }

    /// Write the table to a file
    pub fn save<P: AsRef<Path>>(&self, path: P, options: &CsvWriteOptions) -> Result<()> {
        CsvWriter::write_file(&self.table, path, options)?;
        Ok(())
    }

    /// Print the expression tree of every formula cell, in row-major order
    pub fn dump_expressions<W: Write>(&self, mut writer: W) -> Result<()> {
        for (address, formula) in self.table.formula_cells() {
            writeln!(writer, "{}:", address)?;
            write!(writer, "{}", self.arena.dump(formula.expr))?;
        }
        Ok(())
    }

    /// The cell table
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The cell table, mutably
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// The arena holding every parsed formula
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Split into the table and the arena
    pub fn into_parts(self) -> (Table, ExprArena) {
        (self.table, self.arena)
    }
}

impl FromStr for Spreadsheet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::read(s.as_bytes(), &CsvReadOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_str_and_calculate() {
        let mut sheet: Spreadsheet = "1|=A0+1\n=B0+B0|x".parse().unwrap();
        let stats = sheet.calculate().unwrap();
        assert_eq!(stats.formula_count, 2);
        assert_eq!(sheet.table().cell(1, 0).unwrap().as_number(), Some(4.0));
    }

    #[test]
    fn test_dump_expressions() {
        let sheet: Spreadsheet = "2|=1+A0".parse().unwrap();
        let mut out = Vec::new();
        sheet.dump_expressions(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "B0:\nPLUS:\n  NUMBER: 1.000000\n  CELL(0, 0)\n"
        );
    }

    #[test]
    fn test_write_before_calculate_leaves_formulas_blank() {
        let sheet: Spreadsheet = "3|=A0".parse().unwrap();
        let mut out = Vec::new();
        sheet.write(&mut out, &CsvWriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3.000000|\n");
    }

    #[test]
    fn test_into_parts() {
        let sheet: Spreadsheet = "=1+2".parse().unwrap();
        let (table, arena) = sheet.into_parts();
        assert_eq!(table.rows(), 1);
        assert_eq!(arena.len(), 3);
    }
}
