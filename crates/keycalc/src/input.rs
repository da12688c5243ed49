//! Symbolic calculator inputs
//!
//! Both input sources, keyboard keys and on-screen buttons, are translated
//! into [`Input`] before they reach the engine. Anything that does not map is
//! ignored by the caller.

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// A decimal digit, `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All ten digits, indexed by value
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit; `None` above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit out of range: {value}"))
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

/// One discrete calculator event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Type a digit
    Digit(Digit),
    /// Type a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Evaluate
    Equals,
    /// Reset everything
    Clear,
    /// Reset the current entry only
    ClearEntry,
    /// Delete the last character
    Backspace,
}

impl Input {
    /// Maps a keyboard key name (DOM `KeyboardEvent.key` convention)
    ///
    /// | key | input |
    /// |---|---|
    /// | `0`..`9` | digit |
    /// | `+ - * /` | operator |
    /// | `.` `,` | decimal |
    /// | `=` `Enter` | equals |
    /// | `Escape` `c` `C` | clear |
    /// | `Backspace` `Delete` | backspace |
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "Backspace" | "Delete" => Some(Self::Backspace),
            "." | "," => Some(Self::Decimal),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Self::from_char(c)
            }
        }
    }

    /// Maps a single typed character (digits and operator symbols only)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = Digit::from_char(c) {
            return Some(Self::Digit(d));
        }
        Operator::from_symbol(c).map(Self::Operator)
    }

    /// Maps an on-screen button's `data-action` / `data-value` pair
    ///
    /// `number` and `operator` need a value; the other actions ignore it.
    #[must_use]
    pub fn from_button(action: &str, value: Option<&str>) -> Option<Self> {
        let single_char = || {
            let mut chars = value?.chars();
            let c = chars.next()?;
            chars.next().is_none().then_some(c)
        };

        match action {
            "number" => Digit::from_char(single_char()?).map(Self::Digit),
            "operator" => Operator::from_symbol(single_char()?).map(Self::Operator),
            "decimal" => Some(Self::Decimal),
            "equals" => Some(Self::Equals),
            "clear" => Some(Self::Clear),
            "clear-entry" => Some(Self::ClearEntry),
            "backspace" => Some(Self::Backspace),
            _ => None,
        }
    }

    /// The `data-action` attribute for a button producing this input
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "number",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::ClearEntry => "clear-entry",
            Self::Backspace => "backspace",
        }
    }

    /// The `data-value` attribute, for actions that carry one
    #[must_use]
    pub fn action_value(&self) -> Option<String> {
        match self {
            Self::Digit(d) => Some(d.as_char().to_string()),
            Self::Operator(op) => Some(op.symbol().to_string()),
            _ => None,
        }
    }

    /// Button face text
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.as_char().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}
