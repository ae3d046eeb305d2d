//! A calculator engine with chained binary operations, scientific functions and
//! a bounded calculation history.

pub mod calculator;
pub mod config;
pub mod input;
pub mod repl;

pub use calculator::{CalcError, CalcResult, DisplaySnapshot, ExpressionEngine, History};
pub use config::Config;
pub use input::Action;
