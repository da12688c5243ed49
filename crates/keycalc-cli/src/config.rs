//! CLI configuration

use keycalc::CalculatorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliResult;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - informational events
    Verbose,
    /// Debug - every calculator transition
    Debug,
}

impl Verbosity {
    /// Maps the `-v` count and `-q` flag to a level; `-q` wins
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default log filter directive when `RUST_LOG` is unset
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should stdout use colors
    #[must_use]
    pub fn should_color(self) -> bool {
        self.resolve(|| std::io::IsTerminal::is_terminal(&std::io::stdout()))
    }

    /// Should log output on stderr use colors
    #[must_use]
    pub fn should_color_stderr(self) -> bool {
        self.resolve(|| std::io::IsTerminal::is_terminal(&std::io::stderr()))
    }

    fn resolve(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice, for stdout and logs
    pub color: ColorChoice,
    /// Emit log events as JSON lines
    pub log_json: bool,
    /// Calculator config file, if one was given
    pub config_path: Option<PathBuf>,
    /// Effective calculator limits
    pub calculator: CalculatorConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set JSON log output
    #[must_use]
    pub const fn with_log_json(mut self, log_json: bool) -> Self {
        self.log_json = log_json;
        self
    }

    /// Set calculator limits
    #[must_use]
    pub fn with_calculator(mut self, calculator: CalculatorConfig) -> Self {
        self.calculator = calculator;
        self
    }

    /// Loads calculator limits from `path`, or keeps the defaults when `None`
    pub fn load_calculator(mut self, path: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = path {
            self.calculator = CalculatorConfig::load(path)?;
            self.config_path = Some(path.to_path_buf());
            tracing::info!(path = %path.display(), "using calculator config");
        }
        Ok(self)
    }
}
