//! keycalc - sequential four-function desk calculator
//!
//! The engine is a small explicit state machine: every input (digit, decimal
//! point, operator, equals, backspace, clear, clear entry) is one synchronous
//! transition that returns the new display text. Operators are applied left
//! to right as soon as their right operand is complete; there is no
//! precedence and no expression parsing.
//!
//! Around the engine sit the pieces a host UI needs:
//!
//! - [`input`]: keyboard keys and keypad buttons translated to [`Input`]
//! - [`keypad`]: the on-screen button grid
//! - [`dialog`]: open/close lifecycle and display updates
//! - [`config`]: digit cap, rounding precision and tape length
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for key in ["1", "/", "3", "Enter"] {
//!     if let Some(input) = Input::from_key(key) {
//!         engine.apply(input);
//!     }
//! }
//! assert_eq!(engine.display(), "0.33333333");
//!
//! // Division by zero shows the error sentinel instead of failing
//! for key in ["5", "/", "0", "="] {
//!     engine.apply(Input::from_key(key).unwrap());
//! }
//! assert_eq!(engine.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod dialog;
pub mod input;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult};
    pub use crate::core::engine::CalculatorState;
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{CalcError, CalcResult, CalculatorEngine, Operator, ERROR_TEXT};
    pub use crate::dialog::{CalculatorDialog, DisplaySurface, ScreenBuffer};
    pub use crate::input::{Digit, Input};
    pub use crate::keypad::{Keypad, KeypadButton};
}

pub use prelude::*;
