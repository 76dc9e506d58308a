//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use minicel_core::{Cell, ExprArena, Table};
use minicel_formula::{parse_formula, parse_number, FormulaResult};

/// Table reader
///
/// Reads the whole input once to size the table, then classifies every field
/// as a formula, a number or text. Formulas are parsed into the given arena.
pub struct CsvReader;

impl CsvReader {
    /// Read a table file
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        options: &CsvReadOptions,
        arena: &mut ExprArena,
    ) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options, arena)
    }

    /// Read a table from a reader
    ///
    /// Every line of input is one row, blank lines included; a final line
    /// terminator does not start another row. Both `\n` and `\r\n` end a line.
    pub fn read<R: Read>(
        mut reader: R,
        options: &CsvReadOptions,
        arena: &mut ExprArena,
    ) -> CsvResult<Table> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let builder = Self::line_reader(options);
        let records = input
            .lines()
            .map(|line| Self::split_line(&builder, line, options.delimiter))
            .collect::<CsvResult<Vec<_>>>()?;

        let rows = records.len();
        let cols = records.iter().map(Vec::len).max().unwrap_or(0);

        let mut table = Table::new(rows, cols);

        for (row, fields) in records.into_iter().enumerate() {
            for (column, field) in fields.into_iter().enumerate() {
                let cell = Self::classify(field, arena).map_err(|source| CsvError::Formula {
                    row,
                    column,
                    source,
                })?;
                table.set_cell(row, column, cell)?;
            }
        }

        tracing::debug!(
            rows,
            cols,
            formulas = table.formula_cells().count(),
            exprs = arena.len(),
            "loaded table"
        );

        Ok(table)
    }

    fn line_reader(options: &CsvReadOptions) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(options.delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });
        builder
    }

    /// Split one line into its fields
    ///
    /// An empty line has no fields. A delimiter at the very end of a line does
    /// not open another column.
    fn split_line(
        builder: &csv::ReaderBuilder,
        line: &str,
        delimiter: u8,
    ) -> CsvResult<Vec<String>> {
        let mut record = csv::StringRecord::new();
        if line.is_empty() || !builder.from_reader(line.as_bytes()).read_record(&mut record)? {
            return Ok(Vec::new());
        }

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        if line.as_bytes().last() == Some(&delimiter) {
            fields.pop();
        }
        Ok(fields)
    }

    /// Read a table from a string
    pub fn read_str(
        input: &str,
        options: &CsvReadOptions,
        arena: &mut ExprArena,
    ) -> CsvResult<Table> {
        Self::read(input.as_bytes(), options, arena)
    }

    /// Decide what kind of cell a field holds
    fn classify(field: String, arena: &mut ExprArena) -> FormulaResult<Cell> {
        if field.starts_with('=') {
            return Ok(Cell::formula(parse_formula(&field, arena)?));
        }

        if let Some(n) = parse_number(&field) {
            return Ok(Cell::Number(n));
        }

        Ok(Cell::Text(field))
    }
}
