//! # minicel-csv
//!
//! Reader and writer for minicel's pipe-delimited tables.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions};
pub use reader::CsvReader;
pub use writer::CsvWriter;
