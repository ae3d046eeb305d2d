//! Operand text buffer.

use super::parse::parse_float;
use std::fmt;

const ZERO: &str = "0";
const DECIMAL_POINT: char = '.';

/// An operand held as the text the user typed.
///
/// Keeping the text rather than a number preserves trailing decimal points and
/// trailing zeros while a number is being entered. The buffer is never empty:
/// emptying it leaves `"0"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperandBuffer {
    text: String,
}

impl Default for OperandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OperandBuffer {
    pub fn new() -> Self {
        Self {
            text: ZERO.to_string(),
        }
    }

    /// Create a buffer from existing text, normalizing empty text to `"0"`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::new()
        } else {
            Self { text }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the buffer holds exactly `"0"`.
    pub fn is_zero(&self) -> bool {
        self.text == ZERO
    }

    pub fn has_decimal_point(&self) -> bool {
        self.text.contains(DECIMAL_POINT)
    }

    /// Append a digit or decimal point. A second decimal point is ignored and a
    /// lone `"0"` is replaced by the first digit.
    ///
    /// Returns `false` when the input was ignored.
    pub fn push(&mut self, c: char) -> bool {
        if c == DECIMAL_POINT {
            if self.has_decimal_point() {
                return false;
            }
            self.text.push(c);
        } else if self.is_zero() {
            self.text.clear();
            self.text.push(c);
        } else {
            self.text.push(c);
        }
        true
    }

    /// Remove the last character. `"0"` is left untouched.
    ///
    /// Returns `false` when nothing was removed.
    pub fn pop(&mut self) -> bool {
        if self.is_zero() {
            return false;
        }
        self.text.pop();
        if self.text.is_empty() {
            self.text.push_str(ZERO);
        }
        true
    }

    /// Reset to `"0"`, returning the previous text.
    pub fn take(&mut self) -> String {
        std::mem::replace(&mut self.text, ZERO.to_string())
    }

    /// Numeric value of the leading decimal prefix, if any.
    pub fn value(&self) -> Option<f64> {
        parse_float(&self.text)
    }
}

impl fmt::Display for OperandBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
