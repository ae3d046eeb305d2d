//! Binary operators and scientific functions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operator awaiting its right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl Operation {
    /// All operators, in keypad order.
    pub const ALL: [Operation; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Modulo,
    ];

    /// Parse an operator token. Accepts the ASCII keyboard symbols as well as
    /// the typographic ones printed on the keypad.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "−" => Some(Self::Subtract),
            "×" | "x" => Some(Self::Multiply),
            "÷" => Some(Self::Divide),
            _ => Self::ALL.into_iter().find(|op| op.symbol() == token),
        }
    }

    /// Symbol used in history records and the previous-operand line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulo => "%",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A scientific function applied to the current operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Ln,
    Pi,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
        Self::Pi,
    ];

    /// Parse a function token (case-insensitive name, or the `√`/`π` glyphs).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "√" => return Some(Self::Sqrt),
            "π" => return Some(Self::Pi),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|func| func.name().eq_ignore_ascii_case(token))
    }

    /// Name used in history records, e.g. `sqrt(16) = 4`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Pi => "pi",
        }
    }

    /// Human-readable name used in error messages.
    pub fn description(self) -> &'static str {
        match self {
            Self::Sin => "sine",
            Self::Cos => "cosine",
            Self::Tan => "tangent",
            Self::Sqrt => "square root",
            Self::Log => "logarithm",
            Self::Ln => "natural logarithm",
            Self::Pi => "pi",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
