//! Plain-text frame rendering for the terminal front end
//!
//! Produces lines only; writing them to the terminal is the caller's job.

use crate::core::format::format_result;
use crate::core::CalculatorEngine;
use crate::keypad::{Keypad, KeypadButton};

/// Inner width of the calculator box
pub const FRAME_WIDTH: usize = 27;

const CELL_WIDTH: usize = 6;

/// Help text shown under the calculator
pub const HELP_LINE: &str = "0-9 . + - * / = Enter | Esc/c clear | Backspace | q quit";

/// Renders the calculator box: display, pending operation and keypad
#[must_use]
pub fn render(engine: &CalculatorEngine, keypad: &Keypad) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(FRAME_WIDTH));
    let mut lines = vec![border.clone()];

    lines.push(boxed(&right_align(engine.display(), FRAME_WIDTH - 2)));
    lines.push(boxed(&pending_indicator(engine)));
    lines.push(border.clone());

    let (rows, _) = keypad.dimensions();
    for row in 0..rows {
        let cells: Vec<String> = keypad.row(row).map(cell).collect();
        lines.push(boxed(&cells.join("")));
    }

    lines.push(border);
    lines
}

/// Renders the most recent tape lines, newest last
#[must_use]
pub fn render_tape(engine: &CalculatorEngine, max_lines: usize) -> Vec<String> {
    let lines = engine.tape().lines();
    let skip = lines.len().saturating_sub(max_lines);
    lines.into_iter().skip(skip).collect()
}

fn pending_indicator(engine: &CalculatorEngine) -> String {
    match (engine.accumulator(), engine.pending_operator()) {
        (Some(acc), Some(op)) => {
            let text = format!("{} {}", format_result(acc, engine.config().fraction_digits), op);
            right_align(&text, FRAME_WIDTH - 2)
        }
        _ => String::new(),
    }
}

fn cell(button: &KeypadButton) -> String {
    let label = button.label();
    let inner = CELL_WIDTH - 2;
    let len = label.chars().count();
    let left = inner.saturating_sub(len) / 2;
    let right = inner.saturating_sub(len + left);
    format!("[{}{}{}]", " ".repeat(left), label, " ".repeat(right))
}

/// Right-aligns `text` in `width` columns, keeping the rightmost characters if too long
fn right_align(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

fn boxed(content: &str) -> String {
    let len = content.chars().count();
    let pad = FRAME_WIDTH.saturating_sub(len + 1);
    format!("| {}{}|", content, " ".repeat(pad))
}
