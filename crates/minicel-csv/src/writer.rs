//! CSV writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;
use minicel_core::Table;

/// Table writer
///
/// Every row is written with exactly as many fields as the table has
/// columns. Fields are never quoted.
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a file
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(table, BufWriter::new(file), options)
    }

    /// Write a table to a writer
    pub fn write<W: Write>(table: &Table, mut writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let delimiter = options.delimiter as char;

        for row in 0..table.rows() {
            let mut line = String::new();

            for (col, cell) in table.row(row)?.iter().enumerate() {
                if col > 0 {
                    line.push(delimiter);
                }
                line.push_str(&format!("{:.*}", options.precision, cell.resolved()));
            }

            line.push('\n');
            writer.write_all(line.as_bytes())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Render a table to a string
    pub fn write_string(table: &Table, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buffer = Vec::new();
        Self::write(table, &mut buffer, options)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CsvReadOptions, CsvReader};
    use minicel_core::{Cell, EvalStatus, ExprArena, ExprIndex, FormulaCell};
    use pretty_assertions::assert_eq;

    fn evaluated(value: f64) -> Cell {
        Cell::Formula(FormulaCell {
            expr: ExprIndex::new(0),
            status: EvalStatus::Evaluated,
            cached: value,
        })
    }

    #[test]
    fn test_write_mixed_cells() {
        let mut table = Table::new(2, 3);
        table.set_cell(0, 0, "name").unwrap();
        table.set_cell(0, 1, 10.0).unwrap();
        table.set_cell(0, 2, evaluated(15.0)).unwrap();
        table.set_cell(1, 0, -0.25).unwrap();

        let output = CsvWriter::write_string(&table, &CsvWriteOptions::default()).unwrap();
        assert_eq!(output, "name|10.000000|15.000000\n-0.250000||\n");
    }

    #[test]
    fn test_unevaluated_formula_is_blank() {
        let mut table = Table::new(1, 2);
        table.set_cell(0, 0, Cell::formula(ExprIndex::new(0))).unwrap();
        table.set_cell(0, 1, "x").unwrap();

        let output = CsvWriter::write_string(&table, &CsvWriteOptions::default()).unwrap();
        assert_eq!(output, "|x\n");
    }

    #[test]
    fn test_custom_options() {
        let mut table = Table::new(1, 2);
        table.set_cell(0, 0, 1.0).unwrap();
        table.set_cell(0, 1, 2.5).unwrap();

        let options = CsvWriteOptions {
            delimiter: b',',
            precision: 2,
        };
        let output = CsvWriter::write_string(&table, &options).unwrap();
        assert_eq!(output, "1.00,2.50\n");
    }

    #[test]
    fn test_empty_table() {
        let output = CsvWriter::write_string(&Table::new(0, 0), &CsvWriteOptions::default()).unwrap();
        assert_eq!(output, "");

        let output = CsvWriter::write_string(&Table::new(2, 0), &CsvWriteOptions::default()).unwrap();
        assert_eq!(output, "\n\n");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut table = Table::new(2, 2);
        table.set_cell(0, 0, "a").unwrap();
        table.set_cell(1, 1, 3.0).unwrap();
        CsvWriter::write_file(&table, &path, &CsvWriteOptions::default()).unwrap();

        let mut arena = ExprArena::new();
        let reread = CsvReader::read_file(&path, &CsvReadOptions::default(), &mut arena).unwrap();
        assert_eq!(reread, table);
    }
}
