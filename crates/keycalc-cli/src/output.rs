//! Output formatting

use console::{style, Term};

use crate::error::CliResult;
use crate::replay::EvalReport;

/// Which parts of an eval report to print as text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TextOptions {
    /// Print a line per key
    pub steps: bool,
    /// Print the tape before the result
    pub tape: bool,
    /// Use ANSI colors
    pub use_color: bool,
}

/// Renders an eval report as human-readable lines; the final display is last
#[must_use]
pub fn render_text(report: &EvalReport, options: TextOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if options.steps {
        for step in &report.steps {
            let marker = if step.consumed { "" } else { "  (ignored)" };
            lines.push(format!("{:>9}  {}{marker}", step.key, step.display));
        }
    }

    if options.tape {
        for entry in &report.tape {
            lines.push(dim(entry, options.use_color));
        }
    }

    lines.push(paint_display(&report.display, report.is_error(), options.use_color));
    lines
}

/// Renders an eval report as a JSON document
pub fn render_json(report: &EvalReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn paint_display(text: &str, is_error: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let styled = style(text).force_styling(true).bold();
    if is_error {
        styled.red().to_string()
    } else {
        styled.green().to_string()
    }
}

fn dim(text: &str, use_color: bool) -> String {
    if use_color {
        style(text).force_styling(true).dim().to_string()
    } else {
        text.to_string()
    }
}

/// Writes lines to stdout
pub fn print_lines(lines: &[String]) -> CliResult<()> {
    let term = Term::stdout();
    for line in lines {
        term.write_line(line)?;
    }
    Ok(())
}
