//! Display snapshot handed to the caller for rendering.

use super::format::format_for_display;
use super::operand::OperandBuffer;
use super::operation::Operation;
use serde::Serialize;

/// The two display lines of the calculator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// The operand being entered (or the last result), grouped for display.
    pub current: String,
    /// The committed left operand followed by the pending operator, or empty
    /// when no operation is pending.
    pub previous: String,
}

impl DisplaySnapshot {
    pub(crate) fn new(
        current: &OperandBuffer,
        previous: &str,
        operation: Option<Operation>,
        separator: &str,
    ) -> Self {
        let previous = match operation {
            Some(op) => format!("{} {}", format_for_display(previous, separator), op),
            None => String::new(),
        };

        Self {
            current: format_for_display(current.as_str(), separator),
            previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_previous_line() {
        let snapshot = DisplaySnapshot::new(&OperandBuffer::from_text("1234"), "", None, ",");
        assert_eq!(snapshot.current, "1,234");
        assert_eq!(snapshot.previous, "");
    }

    #[test]
    fn test_pending_operation_line() {
        let snapshot = DisplaySnapshot::new(
            &OperandBuffer::new(),
            "1500.5",
            Some(Operation::Multiply),
            ",",
        );
        assert_eq!(snapshot.current, "0");
        assert_eq!(snapshot.previous, "1,500.5 *");
    }
}
