//! Log subscriber setup
//!
//! Events go to stderr so stdout carries only calculator output. While the
//! interactive session owns the terminal they are held in a [`LogBuffer`] and
//! written out once the terminal is restored.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};

/// Shared in-memory sink for log output
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything written so far
    pub fn take(&self) -> io::Result<Vec<u8>> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?;
        Ok(std::mem::take(&mut *bytes))
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where log events are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Straight to stderr
    Stderr,
    /// Held in memory until the caller drains it
    Buffer(LogBuffer),
}

impl LogTarget {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            Self::Stderr => BoxMakeWriter::new(io::stderr),
            Self::Buffer(buffer) => BoxMakeWriter::new(move || buffer.clone()),
        }
    }
}

/// Builds the filter: `RUST_LOG` if set, otherwise the verbosity default
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Builds the subscriber described by `config`
pub fn subscriber(
    config: &CliConfig,
    target: LogTarget,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let writer = target.make_writer();
    let (json_layer, text_layer) = if config.log_json {
        (Some(fmt::layer().json().with_writer(writer)), None)
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_ansi(config.color.should_color_stderr())
            .with_writer(writer);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(env_filter(config.verbosity))
        .with(json_layer)
        .with(text_layer)
}

/// Installs the global subscriber
pub fn init(config: &CliConfig, target: LogTarget) -> CliResult<()> {
    subscriber(config, target)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use keycalc::{CalculatorConfig, CalculatorDialog, ScreenBuffer};

    fn rust_log_set() -> bool {
        std::env::var_os("RUST_LOG").is_some()
    }

    fn captured(config: &CliConfig, f: impl FnOnce()) -> String {
        let buffer = LogBuffer::new();
        let subscriber = subscriber(config, LogTarget::Buffer(buffer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        String::from_utf8(buffer.take().unwrap()).unwrap()
    }

    fn divide_by_zero() {
        let mut dialog = CalculatorDialog::new(CalculatorConfig::default(), ScreenBuffer::new());
        dialog.open();
        for key in ["5", "/", "0", "="] {
            dialog.handle_key(key);
        }
    }

    #[test]
    fn test_env_filter_uses_verbosity_default() {
        if rust_log_set() {
            return;
        }
        assert_eq!(env_filter(Verbosity::Debug).to_string(), "debug");
        assert_eq!(env_filter(Verbosity::Quiet).to_string(), "error");
    }

    #[test]
    fn test_buffer_holds_engine_warnings() {
        if rust_log_set() {
            return;
        }
        let config = CliConfig::new().with_color(ColorChoice::Never);
        let text = captured(&config, divide_by_zero);
        assert!(text.contains("evaluation failed"), "logs: {text:?}");
        assert!(text.contains("Division by zero"));
    }

    #[test]
    fn test_buffer_take_drains() {
        let buffer = LogBuffer::new();
        buffer.clone().write_all(b"held").unwrap();
        assert_eq!(buffer.take().unwrap(), b"held");
        assert!(buffer.take().unwrap().is_empty());
    }

    #[test]
    fn test_color_never_writes_plain_text() {
        if rust_log_set() {
            return;
        }
        let config = CliConfig::new().with_color(ColorChoice::Never);
        let text = captured(&config, divide_by_zero);
        assert!(!text.is_empty());
        assert!(!text.contains('\u{1b}'), "logs: {text:?}");
    }

    #[test]
    fn test_color_always_writes_ansi() {
        if rust_log_set() {
            return;
        }
        let config = CliConfig::new().with_color(ColorChoice::Always);
        let text = captured(&config, divide_by_zero);
        assert!(text.contains('\u{1b}'), "logs: {text:?}");
    }

    #[test]
    fn test_quiet_filters_warnings() {
        if rust_log_set() {
            return;
        }
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Quiet)
            .with_color(ColorChoice::Never);
        assert!(captured(&config, divide_by_zero).is_empty());
    }

    #[test]
    fn test_json_layer() {
        if rust_log_set() {
            return;
        }
        let config = CliConfig::new().with_log_json(true);
        let text = captured(&config, divide_by_zero);
        let first = text.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(first).unwrap();
        assert_eq!(value["level"], "WARN");
    }
}
