//! Prelude module - common imports for minicel users
//!
//! ```rust
//! use minicel::prelude::*;
//! ```

pub use crate::{
    // Calculation types
    CalculationStats,
    // Cell types
    Cell,
    CellAddress,
    // I/O types
    CsvReadOptions,
    CsvWriteOptions,
    // Error types
    Error,
    // Expression types
    ExprArena,
    ExprIndex,
    Result,
    // Main types
    Spreadsheet,
    Table,
    // Extension traits
    TableCalculationExt,
};
