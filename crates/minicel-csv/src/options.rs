//! CSV options

/// Options for reading tables
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: `|`)
    pub delimiter: u8,
    /// Strip surrounding whitespace from every field (default: true)
    pub trim: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            trim: true,
        }
    }
}

/// Options for writing tables
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: `|`)
    pub delimiter: u8,
    /// Digits after the decimal point for numbers (default: 6)
    pub precision: usize,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            precision: 6,
        }
    }
}
