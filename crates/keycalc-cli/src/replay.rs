//! Key sequence replay for `keycalc eval`

use keycalc::{CalculatorConfig, CalculatorDialog, ScreenBuffer};
use serde::Serialize;

/// Key names passed through whole instead of split into characters
pub const NAMED_KEYS: [&str; 4] = ["Enter", "Escape", "Backspace", "Delete"];

/// Splits command-line arguments into individual key names
///
/// A named key stays intact; any other argument is a run of single-character
/// keys. Whitespace inside a run is skipped so `"5 + 3 ="` works too.
#[must_use]
pub fn split_keys<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut keys = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if NAMED_KEYS.contains(&arg) {
            keys.push(arg.to_string());
        } else {
            keys.extend(
                arg.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| c.to_string()),
            );
        }
    }
    keys
}

/// Display after one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Key name
    pub key: String,
    /// Display text after the key
    pub display: String,
    /// False when the key has no calculator mapping
    pub consumed: bool,
}

/// Outcome of replaying a key sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// Final display text
    pub display: String,
    /// Completed evaluations, oldest first
    pub tape: Vec<String>,
    /// Per-key displays, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl EvalReport {
    /// True when the final display is the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == keycalc::ERROR_TEXT
    }
}

/// Opens a fresh dialog and presses `keys` in order
pub fn replay(config: &CalculatorConfig, keys: &[String], record_steps: bool) -> EvalReport {
    let mut dialog = CalculatorDialog::new(config.clone(), ScreenBuffer::new());
    dialog.open();

    let mut steps = Vec::new();
    for key in keys {
        let consumed = dialog.handle_key(key);
        if !consumed {
            tracing::warn!(key = key.as_str(), "key has no calculator mapping");
        }
        if record_steps {
            steps.push(Step {
                key: key.clone(),
                display: dialog.display().to_string(),
                consumed,
            });
        }
    }

    let report = EvalReport {
        display: dialog.display().to_string(),
        tape: dialog.engine().tape().lines(),
        steps,
    };
    tracing::info!(
        keys = keys.len(),
        renders = dialog.surface().render_count(),
        display = report.display.as_str(),
        "replayed key sequence"
    );
    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> EvalReport {
        replay(&CalculatorConfig::default(), &split_keys(args), true)
    }

    #[test]
    fn test_split_runs_into_chars() {
        assert_eq!(split_keys(&["12+7="]), vec!["1", "2", "+", "7", "="]);
    }

    #[test]
    fn test_split_keeps_named_keys() {
        assert_eq!(
            split_keys(&["12", "Backspace", "Enter"]),
            vec!["1", "2", "Backspace", "Enter"]
        );
    }

    #[test]
    fn test_split_skips_whitespace() {
        assert_eq!(split_keys(&["5 + 3 ="]), vec!["5", "+", "3", "="]);
    }

    #[test]
    fn test_split_unknown_word_becomes_chars() {
        assert_eq!(split_keys(&["Tab"]), vec!["T", "a", "b"]);
    }

    #[test]
    fn test_replay_simple_sum() {
        let report = eval(&["5+3="]);
        assert_eq!(report.display, "8");
        assert_eq!(report.tape, vec!["5 + 3 = 8"]);
        assert!(!report.is_error());
    }

    #[test]
    fn test_replay_steps() {
        let report = eval(&["12", "Backspace"]);
        let displays: Vec<&str> = report.steps.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, vec!["1", "12", "1"]);
        assert!(report.steps.iter().all(|s| s.consumed));
    }

    #[test]
    fn test_replay_unmapped_key_not_consumed() {
        let report = eval(&["7?"]);
        assert_eq!(report.display, "7");
        assert!(!report.steps[1].consumed);
    }

    #[test]
    fn test_replay_division_by_zero() {
        let report = eval(&["5/0="]);
        assert!(report.is_error());
        assert!(report.tape.is_empty());
    }

    #[test]
    fn test_replay_without_steps() {
        let report = replay(&CalculatorConfig::default(), &split_keys(&["1+1="]), false);
        assert!(report.steps.is_empty());
        assert_eq!(report.display, "2");
    }

    #[test]
    fn test_replay_honors_config() {
        let config = CalculatorConfig::default().with_fraction_digits(2);
        let report = replay(&config, &split_keys(&["2/3="]), false);
        assert_eq!(report.display, "0.67");
    }

    #[test]
    fn test_json_omits_empty_steps() {
        let report = replay(&CalculatorConfig::default(), &split_keys(&["4*2="]), false);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["display"], "8");
        assert_eq!(json["tape"][0], "4 × 2 = 8");
        assert!(json.get("steps").is_none());
    }
}
