//! Formula parser
//!
//! A recursive descent parser for minicel formulas. The language is small:
//! numbers, cell references (`A0`, `C12`) and `+`, separated by optional
//! whitespace. Parsed nodes are appended to an [`ExprArena`]; the parser
//! returns the index of the root node.
//!
//! Addition is parsed right-recursively, so `1+2+3` becomes `1+(2+3)`.

use crate::error::{FormulaError, FormulaResult};
use minicel_core::{CellAddress, Expr, ExprArena, ExprIndex};
use std::fmt;

/// Parse a formula cell's text (including its leading `=`) into `arena`
///
/// # Example
/// ```rust
/// use minicel_core::ExprArena;
/// use minicel_formula::parse_formula;
///
/// let mut arena = ExprArena::new();
/// let root = parse_formula("=A0 + 1", &mut arena).unwrap();
/// assert_eq!(arena.display(root).to_string(), "(+ A0 1)");
/// ```
pub fn parse_formula(formula: &str, arena: &mut ExprArena) -> FormulaResult<ExprIndex> {
    let mut source = formula
        .trim()
        .strip_prefix('=')
        .ok_or_else(|| FormulaError::UnexpectedToken {
            found: formula.trim().to_string(),
            expected: "a formula starting with '='",
        })?;

    let root = parse_expr(&mut source, arena)?;
    tracing::trace!(formula, root = %arena.display(root), "parsed formula");
    Ok(root)
}

/// Parse the body of a formula (the text after `=`) into `arena`
///
/// `source` is a cursor: it is advanced past everything consumed. A token
/// following a complete operand that is not `+` ends the expression; it is
/// consumed and anything after it is left unread.
pub fn parse_expr(source: &mut &str, arena: &mut ExprArena) -> FormulaResult<ExprIndex> {
    parse_plus(source, arena)
}

/// Formula tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `+`
    Plus,
    /// A run of ASCII letters, digits and underscores
    Name(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plus => f.write_str("+"),
            Token::Name(name) => f.write_str(name),
        }
    }
}

fn is_name(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan the next token off the front of `source`
///
/// Returns `Ok(None)` at end of input.
pub fn next_token<'a>(source: &mut &'a str) -> FormulaResult<Option<Token<'a>>> {
    *source = source.trim();

    let c = match source.chars().next() {
        Some(c) => c,
        None => return Ok(None),
    };

    if c == '+' {
        *source = &source[1..];
        return Ok(Some(Token::Plus));
    }

    if is_name(c) {
        let end = source.find(|c: char| !is_name(c)).unwrap_or(source.len());
        let (name, rest) = source.split_at(end);
        *source = rest;
        return Ok(Some(Token::Name(name)));
    }

    Err(FormulaError::UnknownToken(c))
}

/// Parse a complete numeric literal
///
/// Accepts everything `f64::from_str` does plus C-style hexadecimal literals
/// (`0x10`, `-0x1.8p1`). Returns `None` unless the whole text is a number.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().or_else(|| parse_hex_number(text))
}

fn parse_hex_number(text: &str) -> Option<f64> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let body = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))?;

    let (mantissa, exponent) = match body.find(['p', 'P']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0.0_f64;
    for c in int_part.chars() {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for c in frac_part.chars() {
        value += f64::from(c.to_digit(16)?) * scale;
        scale /= 16.0;
    }

    if let Some(exponent) = exponent {
        let digits = exponent.trim_start_matches(['+', '-']);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let exponent: i32 = exponent.parse().ok()?;
        value *= 2.0_f64.powi(exponent);
    }

    Some(if negative { -value } else { value })
}

// plus := primary ('+' plus)?
fn parse_plus(source: &mut &str, arena: &mut ExprArena) -> FormulaResult<ExprIndex> {
    let lhs = parse_primary(source, arena)?;

    match next_token(source)? {
        None => Ok(lhs),
        Some(Token::Plus) => {
            let rhs = parse_plus(source, arena)?;
            Ok(arena.alloc(Expr::Add { lhs, rhs }))
        }
        Some(Token::Name(name)) => {
            tracing::debug!(token = name, rest = *source, "ignoring input after operand");
            Ok(lhs)
        }
    }
}

// primary := NUMBER | CELLREF
fn parse_primary(source: &mut &str, arena: &mut ExprArena) -> FormulaResult<ExprIndex> {
    let name = match next_token(source)? {
        Some(Token::Name(name)) => name,
        Some(Token::Plus) => "+",
        None => return Err(FormulaError::UnexpectedEnd),
    };

    if let Some(number) = parse_number(name) {
        return Ok(arena.alloc(Expr::Number(number)));
    }

    let address = CellAddress::parse(name).map_err(FormulaError::InvalidReference)?;
    Ok(arena.alloc(Expr::cell_ref(address)))
}
