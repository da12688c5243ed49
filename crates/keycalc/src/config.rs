//! Calculator configuration
//!
//! Loaded from YAML; every field is optional and falls back to its default.
//!
//! ```yaml
//! max_digits: 15
//! fraction_digits: 8
//! tape_capacity: 100
//! ```

use crate::core::format::DEFAULT_FRACTION_DIGITS;
use crate::core::tape::Tape;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest `fraction_digits` that still round-trips through an f64
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid YAML for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A value is out of range
    #[error("Invalid config value: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

/// Engine limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum digits accepted while typing a number (0 = unlimited)
    pub max_digits: usize,
    /// Fractional digits kept when a result is rounded
    pub fraction_digits: usize,
    /// Completed evaluations kept on the tape (0 disables the tape)
    pub tape_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_digits: 15,
            fraction_digits: DEFAULT_FRACTION_DIGITS,
            tape_capacity: Tape::DEFAULT_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the digit cap
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Set the rounding precision
    #[must_use]
    pub const fn with_fraction_digits(mut self, fraction_digits: usize) -> Self {
        self.fraction_digits = fraction_digits;
        self
    }

    /// Set the tape length
    #[must_use]
    pub const fn with_tape_capacity(mut self, tape_capacity: usize) -> Self {
        self.tape_capacity = tape_capacity;
        self
    }

    /// Parses and validates YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        // An empty document deserializes as null, not as an empty mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }

    /// Renders the configuration as YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Checks value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::Invalid {
                message: format!(
                    "fraction_digits must be at most {MAX_FRACTION_DIGITS}, got {}",
                    self.fraction_digits
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.max_digits, 15);
        assert_eq!(config.fraction_digits, 8);
        assert_eq!(config.tape_capacity, 100);
    }

    #[test]
    fn test_builder() {
        let config = CalculatorConfig::new()
            .with_max_digits(10)
            .with_fraction_digits(4)
            .with_tape_capacity(5);
        assert_eq!(config.max_digits, 10);
        assert_eq!(config.fraction_digits, 4);
        assert_eq!(config.tape_capacity, 5);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = CalculatorConfig::from_yaml_str("max_digits: 9\n").unwrap();
        assert_eq!(config.max_digits, 9);
        assert_eq!(config.fraction_digits, 8);
    }

    #[test]
    fn test_from_yaml_empty_is_default() {
        let config = CalculatorConfig::from_yaml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_from_yaml_unknown_field() {
        let result = CalculatorConfig::from_yaml_str("precision: 3\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_yaml_out_of_range() {
        let result = CalculatorConfig::from_yaml_str("fraction_digits: 40\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CalculatorConfig::new().with_max_digits(12);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("max_digits: 12"));
        assert_eq!(CalculatorConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fraction_digits: 2").unwrap();
        let config = CalculatorConfig::load(file.path()).unwrap();
        assert_eq!(config.fraction_digits, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = CalculatorConfig::load(Path::new("/nonexistent/keycalc.yaml"));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/keycalc.yaml"));
    }
}
