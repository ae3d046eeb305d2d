//! Leading-prefix number parsing for operand text.
//!
//! Operands are held as text while they are typed, so they may be in states no
//! numeric type can represent (`"3."`, `"-"`, `"0.000"`). Parsing takes the longest
//! leading prefix that forms a decimal number and ignores the rest.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches the longest leading decimal literal: optional sign, then either
    /// `Infinity` or digits with an optional fraction and exponent.
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)"
    ).unwrap();
}

/// Parse the leading decimal number of `input`.
///
/// Returns `None` when the input does not start with a number (after leading
/// whitespace). Trailing garbage is ignored, so `"3."` and `"12abc"` both parse.
pub fn parse_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let matched = LEADING_NUMBER.find(trimmed)?;
    matched.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float("0"), Some(0.0));
        assert_eq!(parse_float("42"), Some(42.0));
        assert_eq!(parse_float("-7.25"), Some(-7.25));
        assert_eq!(parse_float(".5"), Some(0.5));
    }

    #[test]
    fn test_incomplete_entry() {
        assert_eq!(parse_float("3."), Some(3.0));
        assert_eq!(parse_float("007"), Some(7.0));
        assert_eq!(parse_float("1.2.3"), Some(1.2));
    }

    #[test]
    fn test_exponent_and_infinity() {
        assert_eq!(parse_float("1e+21"), Some(1e21));
        assert_eq!(parse_float("1.5e-7"), Some(1.5e-7));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("abc"), None);
    }
}
