//! Raw-mode terminal session for `keycalc interactive`

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use keycalc::tui::{self, InputHandler, KeyAction, HELP_LINE};
use keycalc::{CalculatorConfig, CalculatorDialog, DisplaySurface};

use crate::error::CliResult;

/// Display surface for the terminal: keeps the latest text and flags a redraw
#[derive(Debug, Default)]
pub struct FrameSurface {
    text: String,
    dirty: bool,
}

impl FrameSurface {
    /// Creates an empty surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered display text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Forces a redraw, e.g. after a resize
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is due and resets the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl DisplaySurface for FrameSurface {
    fn render(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.dirty = true;
    }
}

/// Lines for one full redraw: calculator box, help and recent tape
#[must_use]
pub fn screen_lines(dialog: &CalculatorDialog<FrameSurface>, tape_lines: usize) -> Vec<String> {
    let mut lines = tui::render(dialog.engine(), dialog.keypad());
    lines.push(HELP_LINE.to_string());

    let tape = tui::render_tape(dialog.engine(), tape_lines);
    if !tape.is_empty() {
        lines.push(String::new());
        lines.extend(tape);
    }
    lines
}

/// Restores the terminal when dropped, including on early return
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for line in lines {
        queue!(out, Print(line), cursor::MoveToNextLine(1))?;
    }
    out.flush()
}

/// Runs the session until the user quits; returns the tape lines
pub fn run(config: CalculatorConfig, tape_lines: usize) -> CliResult<Vec<String>> {
    let mut stdout = io::stdout();
    let guard = TerminalGuard::enter(&mut stdout)?;
    let handler = InputHandler::new();

    let mut dialog = CalculatorDialog::new(config, FrameSurface::new());
    dialog.open();
    tracing::info!("interactive session started");

    loop {
        if dialog.surface_mut().take_dirty() {
            draw(&mut stdout, &screen_lines(&dialog, tape_lines))?;
        }
        match event::read()? {
            Event::Key(key) => match handler.handle_key(key) {
                KeyAction::Quit => break,
                KeyAction::Key(name) => {
                    dialog.handle_key(&name);
                }
                KeyAction::None => {}
            },
            Event::Resize(..) => dialog.surface_mut().mark_dirty(),
            _ => {}
        }
    }

    let tape = dialog.engine().tape().lines();
    dialog.close();
    drop(guard);
    tracing::info!(evaluations = tape.len(), "interactive session closed");
    Ok(tape)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog() -> CalculatorDialog<FrameSurface> {
        let mut dialog = CalculatorDialog::new(CalculatorConfig::default(), FrameSurface::new());
        dialog.open();
        dialog
    }

    #[test]
    fn test_surface_marks_dirty_on_render() {
        let mut surface = FrameSurface::new();
        assert!(!surface.take_dirty());
        surface.render("42");
        assert_eq!(surface.text(), "42");
        assert!(surface.take_dirty());
        assert!(!surface.take_dirty());
    }

    #[test]
    fn test_dialog_keys_reach_surface() {
        let mut dialog = dialog();
        dialog.surface_mut().take_dirty();
        for key in ["9", "*", "9", "Enter"] {
            dialog.handle_key(key);
        }
        assert_eq!(dialog.surface().text(), "81");
        assert!(dialog.surface_mut().take_dirty());
    }

    #[test]
    fn test_screen_lines_without_tape() {
        let dialog = dialog();
        let lines = screen_lines(&dialog, 5);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], HELP_LINE);
    }

    #[test]
    fn test_screen_lines_with_tape() {
        let mut dialog = dialog();
        for key in ["2", "+", "2", "="] {
            dialog.handle_key(key);
        }
        let lines = screen_lines(&dialog, 5);
        assert_eq!(lines.last().map(String::as_str), Some("2 + 2 = 4"));
        assert!(lines[1].ends_with(" 4 |"));
    }

    #[test]
    fn test_screen_lines_tape_hidden_when_zero() {
        let mut dialog = dialog();
        for key in ["2", "+", "2", "="] {
            dialog.handle_key(key);
        }
        assert_eq!(screen_lines(&dialog, 0).len(), 11);
    }

    #[test]
    fn test_quit_closes_and_resets() {
        let mut dialog = dialog();
        dialog.handle_key("7");
        dialog.close();
        assert_eq!(dialog.surface().text(), "0");
        assert!(!dialog.is_shown());
    }
}
