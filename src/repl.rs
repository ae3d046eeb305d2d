//! Terminal front end driving the expression engine.
//!
//! Tokens are applied one at a time, exactly as key presses would be. Errors
//! are reported to the user and processing continues with the cleared engine.

use crate::calculator::{DisplaySnapshot, ExpressionEngine, History, copy_to_clipboard};
use crate::input::Action;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

const PROMPT: &str = "> ";

/// Apply tokens in order, reporting calculation errors to `out`.
pub fn apply_tokens<'a, W: Write>(
    engine: &mut ExpressionEngine,
    tokens: impl IntoIterator<Item = &'a str>,
    out: &mut W,
) -> anyhow::Result<()> {
    for token in tokens {
        for action in Action::parse(token) {
            if let Err(err) = action.apply(engine) {
                writeln!(out, "Error: {}", err)?;
            }
        }
    }
    Ok(())
}

/// Write the display lines. The previous-operand line is only shown while an
/// operation is pending.
pub fn write_display<W: Write>(display: &DisplaySnapshot, out: &mut W) -> anyhow::Result<()> {
    if !display.previous.is_empty() {
        writeln!(out, "  {}", display.previous)?;
    }
    writeln!(out, "  {}", display.current)?;
    Ok(())
}

/// Write the history list, newest first.
pub fn write_history<W: Write>(history: &History, out: &mut W) -> anyhow::Result<()> {
    if history.is_empty() {
        writeln!(out, "History is empty")?;
        return Ok(());
    }
    writeln!(out, "History:")?;
    for line in history.render().lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

/// Read lines of tokens from `input` until end of input or `quit`.
///
/// Besides calculator tokens a line may hold one of the commands `history`,
/// `copy`, `quit` or `exit`.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &mut ExpressionEngine,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let history_changed = Arc::new(AtomicBool::new(false));
    {
        let history_changed = history_changed.clone();
        engine.set_on_history_changed(move |_| history_changed.store(true, Ordering::SeqCst));
    }

    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        match line {
            "quit" | "exit" => break,
            "history" => write_history(engine.history(), out)?,
            "copy" => {
                if let Err(err) = copy_to_clipboard(engine.current_operand()) {
                    warn!(error = %err, "Clipboard copy failed");
                    writeln!(out, "Error: {:#}", err)?;
                } else {
                    writeln!(out, "Copied {}", engine.current_operand())?;
                }
            }
            "" => {}
            _ => {
                debug!(%line, "Applying input line");
                apply_tokens(engine, line.split_whitespace(), out)?;
                write_display(&engine.display(), out)?;
                if history_changed.swap(false, Ordering::SeqCst) {
                    write_history(engine.history(), out)?;
                }
            }
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interactive(input: &str) -> (ExpressionEngine, String) {
        let mut engine = ExpressionEngine::new();
        let mut out = Vec::new();
        run_interactive(&mut engine, input.as_bytes(), &mut out).unwrap();
        (engine, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_apply_tokens_reports_errors() {
        let mut engine = ExpressionEngine::new();
        let mut out = Vec::new();
        apply_tokens(&mut engine, ["5", "/", "0", "=", "2"], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Cannot divide by zero!\n"
        );
        assert_eq!(engine.current_operand(), "2");
    }

    #[test]
    fn test_write_display() {
        let mut out = Vec::new();
        let display = DisplaySnapshot {
            current: "1,000".to_string(),
            previous: "12 +".to_string(),
        };
        write_display(&display, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  12 +\n  1,000\n");
    }

    #[test]
    fn test_interactive_session() {
        let (engine, output) = interactive("3 + 4\n* 2 =\nquit\n5 + 5 =\n");
        assert_eq!(engine.current_operand(), "14");
        assert_eq!(
            output,
            "> \
             \x20 3 +\n  4\n\
             > \
             \x20 14\nHistory:\n  7 * 2 = 14\n  3 + 4 = 7\n\
             > \n"
        );
    }

    #[test]
    fn test_interactive_history_command() {
        let (_, output) = interactive("history\n9 sqrt\n");
        assert!(output.starts_with("> History is empty\n"));
        assert!(output.contains("  sqrt(9) = 3\n"));
    }

    #[test]
    fn test_interactive_error_continues() {
        let (engine, output) = interactive("1 - 5 =\nsqrt\n8\n");
        assert!(output.contains("Error: Cannot calculate square root of negative number!\n"));
        assert_eq!(engine.current_operand(), "8");
        assert_eq!(engine.history().latest(), Some("1 - 5 = -4"));
    }
}
