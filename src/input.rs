//! Mapping of key and button tokens to engine operations.

use crate::calculator::{CalcResult, ExpressionEngine, Function, Operation};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// A run of digits with at most one decimal point, typed in one go.
    static ref NUMBER_LITERAL: Regex = Regex::new(r"^(?:\d+\.?\d*|\.\d*)$").unwrap();
}

/// A single user action on the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A digit `0`-`9` or the decimal point
    AppendDigit(char),
    ChooseOperation(Operation),
    Evaluate,
    ExecuteFunction(Function),
    DeleteLastChar,
    Clear,
    ClearHistory,
}

impl Action {
    /// Parse a single key or button token.
    ///
    /// Returns `None` for tokens that do not name an action.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && (c.is_ascii_digit() || c == '.')
        {
            return Some(Self::AppendDigit(c));
        }

        if let Some(op) = Operation::from_token(token) {
            return Some(Self::ChooseOperation(op));
        }

        match token {
            "=" | "Enter" => return Some(Self::Evaluate),
            "Backspace" | "del" | "⌫" => return Some(Self::DeleteLastChar),
            "Escape" | "Esc" | "C" | "AC" | "clear" => return Some(Self::Clear),
            "clear-history" | "ch" => return Some(Self::ClearHistory),
            "p" | "P" => return Some(Self::ExecuteFunction(Function::Pi)),
            _ => {}
        }

        Function::from_token(token).map(Self::ExecuteFunction)
    }

    /// Expand a token into actions. A number literal such as `12.5` becomes one
    /// [`Action::AppendDigit`] per character. Unknown tokens yield no actions.
    pub fn parse(token: &str) -> Vec<Self> {
        if let Some(action) = Self::from_token(token) {
            return vec![action];
        }

        if NUMBER_LITERAL.is_match(token) {
            return token.chars().map(Self::AppendDigit).collect();
        }

        debug!(%token, "Ignoring unrecognized token");
        Vec::new()
    }

    /// Apply this action to the engine.
    ///
    /// # Errors
    ///
    /// Passes through the calculation error of an evaluation or function.
    pub fn apply(self, engine: &mut ExpressionEngine) -> CalcResult<()> {
        match self {
            Self::AppendDigit(c) => engine.append_digit(c),
            Self::ChooseOperation(op) => engine.choose_operation(op)?,
            Self::Evaluate => {
                engine.evaluate()?;
            }
            Self::ExecuteFunction(func) => {
                engine.execute_function(func)?;
            }
            Self::DeleteLastChar => engine.delete_last_char(),
            Self::Clear => engine.clear(),
            Self::ClearHistory => engine.clear_history(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalcError;

    fn run(tokens: &[&str]) -> (ExpressionEngine, Vec<CalcError>) {
        let mut engine = ExpressionEngine::new();
        let mut errors = Vec::new();
        for token in tokens {
            for action in Action::parse(token) {
                if let Err(err) = action.apply(&mut engine) {
                    errors.push(err);
                }
            }
        }
        (engine, errors)
    }

    #[test]
    fn test_single_tokens() {
        assert_eq!(Action::from_token("7"), Some(Action::AppendDigit('7')));
        assert_eq!(Action::from_token("."), Some(Action::AppendDigit('.')));
        assert_eq!(
            Action::from_token("×"),
            Some(Action::ChooseOperation(Operation::Multiply))
        );
        assert_eq!(Action::from_token("Enter"), Some(Action::Evaluate));
        assert_eq!(
            Action::from_token("Backspace"),
            Some(Action::DeleteLastChar)
        );
        assert_eq!(Action::from_token("Escape"), Some(Action::Clear));
        assert_eq!(
            Action::from_token("P"),
            Some(Action::ExecuteFunction(Function::Pi))
        );
        assert_eq!(
            Action::from_token("sqrt"),
            Some(Action::ExecuteFunction(Function::Sqrt))
        );
        assert_eq!(Action::from_token("ch"), Some(Action::ClearHistory));
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        assert_eq!(Action::from_token("F5"), None);
        assert!(Action::parse("hello").is_empty());
        assert!(Action::parse("1.2.3").is_empty());
        assert!(Action::parse("").is_empty());
    }

    #[test]
    fn test_number_literal_expands() {
        assert_eq!(
            Action::parse("12.5"),
            vec![
                Action::AppendDigit('1'),
                Action::AppendDigit('2'),
                Action::AppendDigit('.'),
                Action::AppendDigit('5'),
            ]
        );
    }

    #[test]
    fn test_chained_sequence() {
        let (engine, errors) = run(&["3", "+", "4", "×", "2", "="]);
        assert!(errors.is_empty());
        assert_eq!(engine.current_operand(), "14");
    }

    #[test]
    fn test_divide_by_zero_sequence() {
        let (engine, errors) = run(&["5", "÷", "0", "="]);
        assert_eq!(errors, vec![CalcError::DivideByZero]);
        assert_eq!(engine.current_operand(), "0");
        assert_eq!(engine.pending_operation(), None);
    }

    #[test]
    fn test_keyboard_sequence() {
        let tokens = ["1234", ".", "5", "Backspace", "Backspace", "*", "2", "Enter"];
        let (engine, errors) = run(&tokens);
        assert!(errors.is_empty());
        assert_eq!(engine.current_operand(), "2468");
        assert_eq!(engine.display().current, "2,468");
        assert_eq!(engine.history().latest(), Some("1234 * 2 = 2468"));
    }

    #[test]
    fn test_clear_history_action() {
        let (engine, _) = run(&["9", "sqrt", "clear-history"]);
        assert!(engine.history().is_empty());
        assert_eq!(engine.current_operand(), "3");
    }
}
