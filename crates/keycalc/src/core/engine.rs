//! Calculator entry state machine
//!
//! Sequential four-function semantics: every operator is applied as soon as
//! its right operand is complete, left to right, with no precedence. Each
//! operation is a single synchronous transition that returns the new display
//! text.

use crate::config::CalculatorConfig;
use crate::core::format::{format_result, parse_display};
use crate::core::tape::{Tape, TapeEntry};
use crate::core::{CalcError, CalcResult, Operator, ERROR_TEXT};
use crate::input::{Digit, Input};
use serde::Serialize;

/// Everything the engine remembers between inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Current entry or most recent result; never empty
    pub display: String,
    /// Operator waiting for its right operand
    pub pending_operator: Option<Operator>,
    /// Left operand captured when the operator was chosen
    pub accumulator: Option<f64>,
    /// Next digit starts a new number instead of extending `display`
    pub awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operator: None,
            accumulator: None,
            awaiting_operand: false,
        }
    }
}

/// Desk calculator engine owning one [`CalculatorState`]
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    state: CalculatorState,
    config: CalculatorConfig,
    tape: Tape,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates an engine with custom limits
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            tape: Tape::with_capacity(config.tape_capacity),
            config,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Full state snapshot
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator
    }

    /// Captured left operand
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.state.accumulator
    }

    /// True when the next digit starts a fresh number
    #[must_use]
    pub fn is_awaiting_operand(&self) -> bool {
        self.state.awaiting_operand
    }

    /// True while the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.display == ERROR_TEXT
    }

    /// Completed evaluations
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Applies one symbolic input and returns the new display text
    pub fn apply(&mut self, input: Input) -> &str {
        match input {
            Input::Digit(d) => {
                self.input_digit(d);
            }
            Input::Decimal => {
                self.input_decimal();
            }
            Input::Operator(op) => {
                self.input_operator(op);
            }
            Input::Equals => {
                self.input_equals();
            }
            Input::Clear => {
                self.clear();
            }
            Input::ClearEntry => {
                self.clear_entry();
            }
            Input::Backspace => {
                self.backspace();
            }
        }
        tracing::debug!(?input, display = %self.state.display, "applied input");
        &self.state.display
    }

    /// Types a digit
    pub fn input_digit(&mut self, d: Digit) -> &str {
        let ch = d.as_char();
        if self.state.awaiting_operand {
            self.state.display = ch.to_string();
            self.state.awaiting_operand = false;
        } else if self.state.display == "0" {
            self.state.display = ch.to_string();
        } else if !self.at_digit_cap() {
            self.state.display.push(ch);
        }
        &self.state.display
    }

    /// Types a decimal point; a second point in the same number is ignored
    pub fn input_decimal(&mut self) -> &str {
        if self.state.awaiting_operand {
            self.state.display = "0.".to_string();
            self.state.awaiting_operand = false;
        } else if !self.state.display.contains('.') {
            self.state.display.push('.');
        }
        &self.state.display
    }

    /// Chooses an operator
    ///
    /// The first operator captures the display as the accumulator. A later
    /// operator, once a right operand has been typed, first evaluates the
    /// pending operation and carries its result forward. Without an operand in
    /// between it only replaces the pending operator.
    pub fn input_operator(&mut self, op: Operator) -> &str {
        if self.is_error() {
            self.state.display = "0".to_string();
        }

        match (self.state.pending_operator, self.state.accumulator) {
            (Some(pending), Some(lhs)) => {
                if !self.state.awaiting_operand {
                    match self.evaluate(pending, lhs) {
                        Ok(result) => self.state.accumulator = Some(result),
                        // Stay in the error state; the new operator is dropped
                        Err(_) => return &self.state.display,
                    }
                }
            }
            _ => {
                self.state.accumulator = Some(parse_display(&self.state.display));
            }
        }

        self.state.pending_operator = Some(op);
        self.state.awaiting_operand = true;
        &self.state.display
    }

    /// Completes the pending operation; a no-op without one or without an operand
    pub fn input_equals(&mut self) -> &str {
        if self.state.awaiting_operand {
            return &self.state.display;
        }
        if let (Some(pending), Some(lhs)) = (self.state.pending_operator, self.state.accumulator) {
            if self.evaluate(pending, lhs).is_ok() {
                self.state.pending_operator = None;
                self.state.accumulator = None;
            }
        }
        &self.state.display
    }

    /// Deletes the last typed character
    pub fn backspace(&mut self) -> &str {
        if self.is_error() {
            self.state.display = "0".to_string();
            return &self.state.display;
        }
        self.state.display.pop();
        if self.state.display.is_empty() || self.state.display == "-" {
            self.state.display = "0".to_string();
        }
        &self.state.display
    }

    /// Full reset
    pub fn clear(&mut self) -> &str {
        self.state = CalculatorState::default();
        &self.state.display
    }

    /// Resets only the current entry, keeping the pending operation
    pub fn clear_entry(&mut self) -> &str {
        self.state.display = "0".to_string();
        &self.state.display
    }

    /// Computes `lhs OP display` and shows the result
    ///
    /// On failure the display shows the error sentinel and the pending
    /// operation is dropped.
    fn evaluate(&mut self, op: Operator, lhs: f64) -> CalcResult<f64> {
        let rhs = parse_display(&self.state.display);
        self.state.awaiting_operand = true;

        match op.apply(lhs, rhs) {
            Ok(result) => {
                let text = format_result(result, self.config.fraction_digits);
                let lhs_text = format_result(lhs, self.config.fraction_digits);
                let rhs_text = std::mem::replace(&mut self.state.display, text.clone());
                self.tape.push(TapeEntry::new(lhs_text, op, rhs_text, text));
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(%err, %op, lhs, rhs, "evaluation failed");
                self.fail(err)
            }
        }
    }

    fn fail(&mut self, err: CalcError) -> CalcResult<f64> {
        self.state.display = ERROR_TEXT.to_string();
        self.state.pending_operator = None;
        self.state.accumulator = None;
        self.state.awaiting_operand = true;
        Err(err)
    }

    fn at_digit_cap(&self) -> bool {
        self.config.max_digits != 0
            && self
                .state
                .display
                .chars()
                .filter(char::is_ascii_digit)
                .count()
                >= self.config.max_digits
    }
}
