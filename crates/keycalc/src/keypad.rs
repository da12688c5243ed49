//! On-screen keypad layout
//!
//! Layout:
//! ```text
//! [ CE ] [ C ] [ ⌫ ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ − ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [ 0  ] [ . ] [ = ]
//! ```
//!
//! Every button carries the `data-action` / `data-value` attributes a page
//! would render, so a click can be routed through [`Input::from_button`].

use crate::core::Operator;
use crate::input::{Digit, Input};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The input this button produces
    pub input: Input,
    /// Element id, e.g. `btn-7`, `btn-plus`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at a grid position
    #[must_use]
    pub fn new(input: Input, row: usize, col: usize) -> Self {
        let id = match input {
            Input::Digit(d) => format!("btn-{}", d.value()),
            Input::Operator(op) => format!("btn-{}", op.name()),
            other => format!("btn-{}", other.action_name()),
        };
        Self { input, id, row, col }
    }

    /// `data-action` attribute
    #[must_use]
    pub fn action(&self) -> &'static str {
        self.input.action_name()
    }

    /// `data-value` attribute
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.input.action_value()
    }

    /// Face text
    #[must_use]
    pub fn label(&self) -> String {
        self.input.label()
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: usize| Input::Digit(Digit::ALL[d]);
        let grid: [Vec<Input>; 5] = [
            vec![
                Input::ClearEntry,
                Input::Clear,
                Input::Backspace,
                Input::Operator(Operator::Divide),
            ],
            vec![
                digit(7),
                digit(8),
                digit(9),
                Input::Operator(Operator::Multiply),
            ],
            vec![
                digit(4),
                digit(5),
                digit(6),
                Input::Operator(Operator::Subtract),
            ],
            vec![digit(1), digit(2), digit(3), Input::Operator(Operator::Add)],
            vec![digit(0), Input::Decimal, Input::Equals],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, inputs)| {
                inputs
                    .iter()
                    .enumerate()
                    .map(move |(col, input)| KeypadButton::new(*input, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: grid.len(),
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons, row by row
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Button at a grid position, if that cell is occupied
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button producing an input
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Resolves a click on an element id
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Input> {
        let button = self.find_button_by_id(element_id)?;
        let value = button.value();
        Input::from_button(button.action(), value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 19);
    }

    #[test]
    fn test_button_ids() {
        let keypad = Keypad::new();
        for id in [
            "btn-0",
            "btn-9",
            "btn-plus",
            "btn-minus",
            "btn-times",
            "btn-divide",
            "btn-decimal",
            "btn-equals",
            "btn-clear",
            "btn-clear-entry",
            "btn-backspace",
        ] {
            assert!(keypad.find_button_by_id(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(1, 0).unwrap().label(), "7");
        assert_eq!(keypad.get_button_at(0, 3).unwrap().label(), "÷");
        assert_eq!(keypad.get_button_at(4, 2).unwrap().input, Input::Equals);
        assert!(keypad.get_button_at(4, 3).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
    }

    #[test]
    fn test_button_attributes() {
        let keypad = Keypad::new();
        let plus = keypad.find_button_by_id("btn-plus").unwrap();
        assert_eq!(plus.action(), "operator");
        assert_eq!(plus.value().as_deref(), Some("+"));

        let ce = keypad.find_button_by_id("btn-clear-entry").unwrap();
        assert_eq!(ce.action(), "clear-entry");
        assert_eq!(ce.value(), None);
        assert_eq!(ce.label(), "CE");
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("btn-times"),
            Some(Input::Operator(Operator::Multiply))
        );
        assert_eq!(
            keypad.handle_click("btn-3"),
            Some(Input::Digit(Digit::new(3).unwrap()))
        );
        assert_eq!(keypad.handle_click("btn-sqrt"), None);
    }

    #[test]
    fn test_row_iteration() {
        let keypad = Keypad::new();
        let labels: Vec<String> = keypad.row(4).map(KeypadButton::label).collect();
        assert_eq!(labels, vec!["0", ".", "="]);
    }

    #[test]
    fn test_every_digit_and_operator_present() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            let input = Input::Digit(Digit::new(d).unwrap());
            assert!(keypad.find_button_by_input(input).is_some());
        }
        for op in Operator::ALL {
            assert!(keypad.find_button_by_input(Input::Operator(op)).is_some());
        }
    }
}
