//! Subcommand handlers
//!
//! Each handler returns the lines to print so the work can be tested without
//! capturing stdout.

use crate::commands::{ConfigArgs, EvalArgs, EvalFormat, InteractiveArgs};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{render_json, render_text, TextOptions};
use crate::replay::{replay, split_keys};
use crate::{interactive, CliError};

/// Replays the given keys and renders the result
pub fn eval(config: &CliConfig, args: &EvalArgs) -> CliResult<Vec<String>> {
    let keys = split_keys(&args.keys);
    if keys.is_empty() {
        return Err(CliError::invalid_argument("no keys to press"));
    }

    let report = replay(&config.calculator, &keys, args.steps);

    match args.format {
        EvalFormat::Json => Ok(vec![render_json(&report)?]),
        EvalFormat::Text => Ok(render_text(
            &report,
            TextOptions {
                steps: args.steps,
                tape: args.tape,
                use_color: config.color.should_color(),
            },
        )),
    }
}

/// Renders the effective calculator configuration as YAML
pub fn show_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<Vec<String>> {
    let mut lines = Vec::new();
    if args.source {
        let source = config.config_path.as_ref().map_or_else(
            || "built-in defaults".to_string(),
            |path| path.display().to_string(),
        );
        lines.push(format!("# source: {source}"));
    }
    let yaml = config.calculator.to_yaml()?;
    lines.extend(yaml.lines().map(str::to_string));
    Ok(lines)
}

/// Runs the terminal session and returns the tape it produced
pub fn interactive(config: &CliConfig, args: &InteractiveArgs) -> CliResult<Vec<String>> {
    interactive::run(config.calculator.clone(), args.tape_lines)
}
