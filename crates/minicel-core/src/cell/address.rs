//! Cell address type

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A0", "C12")
///
/// Both coordinates are zero-based: the column is written as a single uppercase
/// letter (`A` = 0, `B` = 1, ...) and the row as a plain decimal number, so the
/// top-left cell is `A0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: usize,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from `<LETTER><row>` notation
    ///
    /// # Examples
    /// ```
    /// use minicel_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A0").unwrap();
    /// assert_eq!(addr, CellAddress::new(0, 0));
    ///
    /// let addr = CellAddress::parse("C12").unwrap();
    /// assert_eq!(addr.row, 12);
    /// assert_eq!(addr.col, 2);
    ///
    /// assert!(CellAddress::parse("a1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();

        let col = match chars.next() {
            Some(c) if c.is_ascii_uppercase() => (c as u8 - b'A') as usize,
            _ => {
                return Err(Error::invalid_address(
                    s,
                    "cell reference must start with a capital letter",
                ))
            }
        };

        let digits = chars.as_str();
        let row = digits
            .starts_with(|c: char| c.is_ascii_digit())
            .then(|| digits.parse::<usize>().ok())
            .flatten()
            .ok_or_else(|| {
                Error::invalid_address(s, "cell reference must have an integer as the row number")
            })?;

        Ok(Self { row, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    ///
    /// Only single-letter columns can be written in formulas; wider columns
    /// still get a readable name in diagnostics.
    pub fn column_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.col), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(usize, usize)> for CellAddress {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(1), "B");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
        assert_eq!(CellAddress::column_to_letters(701), "ZZ");
    }

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A0").unwrap();
        assert_eq!(addr.row, 0);
        assert_eq!(addr.col, 0);

        let addr = CellAddress::parse("B2").unwrap();
        assert_eq!(addr.row, 2);
        assert_eq!(addr.col, 1);

        let addr = CellAddress::parse("Z007").unwrap();
        assert_eq!(addr.row, 7);
        assert_eq!(addr.col, 25);
    }

    #[test]
    fn test_cell_address_parse_errors() {
        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("a1").is_err());
        assert!(CellAddress::parse("AB1").is_err());
        assert!(CellAddress::parse("A_1").is_err());
        assert!(CellAddress::parse("A-1").is_err());
        assert!(CellAddress::parse("A+1").is_err());
    }

    #[test]
    fn test_parse_error_reason() {
        let err = CellAddress::parse("a1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid cell address 'a1': cell reference must start with a capital letter"
        );

        let err = CellAddress::parse("Ax").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid cell address 'Ax': cell reference must have an integer as the row number"
        );
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A0");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C99");
        assert_eq!(CellAddress::new(3, 26).to_string(), "AA3");
    }

    #[test]
    fn test_display_parse_agree() {
        let addr = CellAddress::new(42, 7);
        assert_eq!(addr.to_string().parse::<CellAddress>().unwrap(), addr);
    }
}
