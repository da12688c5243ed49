//! Terminal keyboard handling
//!
//! Terminal key events are converted to DOM-style key names so they go through
//! the same key map as every other input source.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal key press means to the interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a key name to the calculator dialog
    Key(String),
    /// Leave the session
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q' | 'd') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => KeyAction::Key(c.to_string()),
            KeyCode::Enter => KeyAction::Key("Enter".to_string()),
            KeyCode::Esc => KeyAction::Key("Escape".to_string()),
            KeyCode::Backspace => KeyAction::Key("Backspace".to_string()),
            KeyCode::Delete => KeyAction::Key("Delete".to_string()),
            _ => KeyAction::None,
        }
    }
}
