//! keycalc CLI library
//!
//! Command-line front end for the keycalc calculator: replay key sequences
//! (`eval`), run the calculator in a raw-mode terminal (`interactive`) or
//! print the effective configuration (`config`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod interactive;
pub mod logging;
mod output;
pub mod replay;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, EvalArgs, EvalFormat, InteractiveArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{print_lines, render_json, render_text, TextOptions};
pub use replay::{replay, split_keys, EvalReport, Step};
