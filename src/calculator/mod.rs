//! Calculator core.
//!
//! This module provides:
//! - An operand text buffer that keeps numbers exactly as typed
//! - The expression engine state machine with a bounded history
//! - Display formatting with thousands separators
//! - Copying results to the clipboard

mod clipboard;
mod display;
mod engine;
mod format;
mod history;
mod operand;
mod operation;
mod parse;

pub use clipboard::copy_to_clipboard;
pub use display::DisplaySnapshot;
pub use engine::{CalcError, CalcResult, EngineState, ExpressionEngine};
pub use format::{DEFAULT_GROUP_SEPARATOR, format_for_display, format_number};
pub use history::{DEFAULT_MAX_ITEMS, History};
pub use operand::OperandBuffer;
pub use operation::{Function, Operation};
pub use parse::parse_float;
