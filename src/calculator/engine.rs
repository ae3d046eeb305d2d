//! The calculator state machine.
//!
//! [`ExpressionEngine`] holds a previous operand, a pending operation and the
//! operand currently being entered. Binary operations are applied left to right
//! as operators are chosen (no precedence), scientific functions apply to the
//! current operand immediately. Every completed calculation is recorded in a
//! bounded [`History`].

use super::display::DisplaySnapshot;
use super::format::{DEFAULT_GROUP_SEPARATOR, format_number};
use super::history::{DEFAULT_MAX_ITEMS, History};
use super::operand::OperandBuffer;
use super::operation::{Function, Operation};
use super::parse::parse_float;
use std::f64::consts::PI;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// A calculation that cannot produce a result.
///
/// These are user-facing conditions: the engine resets itself before
/// returning one, so the caller only has to show the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivideByZero,

    #[error("Cannot calculate square root of negative number!")]
    NegativeSquareRoot,

    #[error("Cannot calculate {} of non-positive number!", .0.description())]
    NonPositiveLogArgument(Function),
}

/// Result type alias for engine operations.
///
/// `Ok(None)` means the operation was a no-op (nothing pending, or an operand
/// that does not parse as a number).
pub type CalcResult<T> = Result<T, CalcError>;

/// Whether a binary operation is waiting for its right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    AwaitingRightOperand,
}

type DisplayCallback = Arc<dyn Fn(&DisplaySnapshot) + Send + Sync>;
type HistoryCallback = Arc<dyn Fn(&History) + Send + Sync>;

/// Calculator state plus its history.
pub struct ExpressionEngine {
    current: OperandBuffer,
    /// Empty when no left operand is pending.
    previous: String,
    operation: Option<Operation>,
    history: History,
    group_separator: String,
    on_display_changed: Option<DisplayCallback>,
    on_history_changed: Option<HistoryCallback>,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self {
            current: OperandBuffer::new(),
            previous: String::new(),
            operation: None,
            history: History::new(DEFAULT_MAX_ITEMS),
            group_separator: DEFAULT_GROUP_SEPARATOR.to_string(),
            on_display_changed: None,
            on_history_changed: None,
        }
    }

    /// Replace the history with an empty one holding at most `max_items` records.
    pub fn with_history_capacity(mut self, max_items: usize) -> Self {
        self.history = History::new(max_items);
        self
    }

    /// Set the thousands separator used by [`Self::display`].
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Set the callback invoked after every operation with the new display.
    pub fn set_on_display_changed(
        &mut self,
        callback: impl Fn(&DisplaySnapshot) + Send + Sync + 'static,
    ) {
        self.on_display_changed = Some(Arc::new(callback));
    }

    /// Set the callback invoked whenever a record is added or history is cleared.
    pub fn set_on_history_changed(&mut self, callback: impl Fn(&History) + Send + Sync + 'static) {
        self.on_history_changed = Some(Arc::new(callback));
    }

    pub fn current_operand(&self) -> &str {
        self.current.as_str()
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> EngineState {
        if self.operation.is_some() {
            EngineState::AwaitingRightOperand
        } else {
            EngineState::Idle
        }
    }

    /// Current display lines, formatted with the configured separator.
    pub fn display(&self) -> DisplaySnapshot {
        DisplaySnapshot::new(
            &self.current,
            &self.previous,
            self.operation,
            &self.group_separator,
        )
    }

    /// Append a digit or decimal point to the current operand.
    pub fn append_digit(&mut self, c: char) {
        if !self.current.push(c) {
            debug!("Ignoring second decimal point");
        }
        self.notify_display();
    }

    /// Choose the binary operation to apply once the right operand is entered.
    ///
    /// If an operation is already pending it is evaluated first, so `3 + 4 *`
    /// continues with `7 *`. Choosing an operator while the current operand is
    /// `"0"` does nothing.
    ///
    /// # Errors
    ///
    /// Returns the error of the implicit evaluation; the operator is then not
    /// applied and the engine is left cleared.
    pub fn choose_operation(&mut self, op: Operation) -> CalcResult<()> {
        let result = self.select_operation(op);
        self.notify_display();
        result
    }

    /// Apply the pending operation to the previous and current operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivideByZero`] when dividing by zero. The engine is
    /// cleared before returning.
    pub fn evaluate(&mut self) -> CalcResult<Option<f64>> {
        let result = self.compute();
        self.notify_display();
        result
    }

    /// Apply a scientific function to the current operand.
    ///
    /// Trigonometric functions take degrees. `pi` ignores the operand value.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::NegativeSquareRoot`] or
    /// [`CalcError::NonPositiveLogArgument`] for arguments outside the domain.
    /// The engine is cleared before returning.
    pub fn execute_function(&mut self, func: Function) -> CalcResult<Option<f64>> {
        let result = self.apply_function(func);
        self.notify_display();
        result
    }

    /// Remove the last typed character of the current operand.
    pub fn delete_last_char(&mut self) {
        self.current.pop();
        self.notify_display();
    }

    /// Reset operands and the pending operation. History is kept.
    pub fn clear(&mut self) {
        self.reset();
        self.notify_display();
    }

    /// Insert a record at the front of the history.
    pub fn add_to_history(&mut self, record: String) {
        debug!(%record, "Recording calculation");
        if let Some(evicted) = self.history.push(record) {
            debug!(
                %evicted,
                max_items = self.history.max_items(),
                "History full, evicted oldest record"
            );
        }
        self.notify_history();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.notify_history();
        self.notify_display();
    }

    fn select_operation(&mut self, op: Operation) -> CalcResult<()> {
        if self.current.is_zero() {
            return Ok(());
        }
        if !self.previous.is_empty() {
            self.compute()?;
        }

        debug!(operation = %op, operand = %self.current, "Awaiting right operand");
        self.operation = Some(op);
        self.previous = self.current.take();
        Ok(())
    }

    fn compute(&mut self) -> CalcResult<Option<f64>> {
        let Some(op) = self.operation else {
            return Ok(None);
        };
        let (Some(prev), Some(current)) = (parse_float(&self.previous), self.current.value())
        else {
            return Ok(None);
        };

        let value = match op {
            Operation::Add => prev + current,
            Operation::Subtract => prev - current,
            Operation::Multiply => prev * current,
            Operation::Divide => {
                if current == 0.0 {
                    return Err(self.fail(CalcError::DivideByZero));
                }
                prev / current
            }
            Operation::Power => prev.powf(current),
            // `%` on floats keeps the sign of the dividend.
            Operation::Modulo => prev % current,
        };

        self.add_to_history(format!(
            "{} {} {} = {}",
            format_number(prev),
            op,
            format_number(current),
            format_number(value)
        ));
        self.finish(value);
        Ok(Some(value))
    }

    fn apply_function(&mut self, func: Function) -> CalcResult<Option<f64>> {
        let Some(arg) = self.current.value() else {
            return Ok(None);
        };

        let value = match func {
            Function::Sin => (arg * PI / 180.0).sin(),
            Function::Cos => (arg * PI / 180.0).cos(),
            Function::Tan => (arg * PI / 180.0).tan(),
            Function::Sqrt => {
                if arg < 0.0 {
                    return Err(self.fail(CalcError::NegativeSquareRoot));
                }
                arg.sqrt()
            }
            Function::Log | Function::Ln => {
                if arg <= 0.0 {
                    return Err(self.fail(CalcError::NonPositiveLogArgument(func)));
                }
                if func == Function::Log {
                    arg.log10()
                } else {
                    arg.ln()
                }
            }
            Function::Pi => PI,
        };

        self.add_to_history(format!(
            "{}({}) = {}",
            func,
            format_number(arg),
            format_number(value)
        ));
        self.finish(value);
        Ok(Some(value))
    }

    /// Store a result as the new current operand and return to idle.
    fn finish(&mut self, value: f64) {
        self.current = OperandBuffer::from_text(format_number(value));
        self.operation = None;
        self.previous.clear();
    }

    fn fail(&mut self, err: CalcError) -> CalcError {
        warn!(error = %err, "Calculation failed, clearing");
        self.reset();
        err
    }

    fn reset(&mut self) {
        self.current = OperandBuffer::new();
        self.previous.clear();
        self.operation = None;
    }

    fn notify_display(&self) {
        if let Some(callback) = &self.on_display_changed {
            callback(&self.display());
        }
    }

    fn notify_history(&self) {
        if let Some(callback) = &self.on_history_changed {
            callback(&self.history);
        }
    }
}
