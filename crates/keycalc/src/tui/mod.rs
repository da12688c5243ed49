//! Terminal front end helpers
//!
//! Key translation and plain-text frame rendering; the event loop itself lives
//! in the CLI.

pub mod frame;
mod input;

pub use frame::{render, render_tape, FRAME_WIDTH, HELP_LINE};
pub use input::{InputHandler, KeyAction};
