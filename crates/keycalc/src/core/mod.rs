//! Calculator core: arithmetic, display formatting, and the entry state machine
//!
//! Everything in here is independent of any input device or rendering surface.

pub mod engine;
pub mod format;
mod operations;
pub mod tape;

pub use engine::CalculatorEngine;
pub use operations::Operator;

use thiserror::Error;

/// Literal shown on the display after a failed evaluation
pub const ERROR_TEXT: &str = "Error";

/// Result type for arithmetic operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic faults - the engine turns every one of them into [`ERROR_TEXT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}
