//! Calculator dialog: lifecycle, input routing and display updates
//!
//! The dialog owns exactly one engine and one display surface. It is the only
//! place that knows whether the calculator is on screen: keyboard input is
//! honored only while the dialog is shown, and closing it resets the engine.

use crate::config::CalculatorConfig;
use crate::core::CalculatorEngine;
use crate::input::Input;
use crate::keypad::Keypad;

/// Anything that can show the calculator's display text
pub trait DisplaySurface {
    /// Shows `text`, replacing whatever was shown before
    fn render(&mut self, text: &str);
}

/// In-memory surface that keeps every frame it was asked to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenBuffer {
    frames: Vec<String>,
}

impl ScreenBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Every frame, oldest first
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Number of renders
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.frames.len()
    }
}

impl DisplaySurface for ScreenBuffer {
    fn render(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }
}

/// Modal calculator bound to a display surface
#[derive(Debug)]
pub struct CalculatorDialog<S: DisplaySurface> {
    engine: CalculatorEngine,
    keypad: Keypad,
    surface: S,
    shown: bool,
}

impl<S: DisplaySurface> CalculatorDialog<S> {
    /// Creates a hidden dialog and paints the initial display
    pub fn new(config: CalculatorConfig, mut surface: S) -> Self {
        let engine = CalculatorEngine::with_config(config);
        surface.render(engine.display());
        Self {
            engine,
            keypad: Keypad::new(),
            surface,
            shown: false,
        }
    }

    /// True while the dialog is on screen
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// The owned engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The keypad shown in the dialog
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The display surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the display surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Shows the dialog
    pub fn open(&mut self) {
        self.shown = true;
        tracing::debug!("calculator dialog opened");
        self.surface.render(self.engine.display());
    }

    /// Hides the dialog and resets the engine
    pub fn close(&mut self) {
        self.shown = false;
        self.engine.clear();
        tracing::debug!("calculator dialog closed");
        self.surface.render(self.engine.display());
    }

    /// Applies an input directly, regardless of visibility, and renders
    pub fn dispatch(&mut self, input: Input) -> &str {
        let text = self.engine.apply(input);
        self.surface.render(text);
        self.engine.display()
    }

    /// Routes a keyboard key; returns true if the key was consumed
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.shown {
            return false;
        }
        match Input::from_key(key) {
            Some(input) => {
                self.dispatch(input);
                true
            }
            None => {
                tracing::debug!(key, "ignored key");
                false
            }
        }
    }

    /// Activates a keypad button by element id; returns true if it exists
    pub fn press(&mut self, button_id: &str) -> bool {
        match self.keypad.handle_click(button_id) {
            Some(input) => {
                self.dispatch(input);
                true
            }
            None => {
                tracing::debug!(button_id, "ignored button");
                false
            }
        }
    }

    /// Consumes the dialog, returning its surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}
