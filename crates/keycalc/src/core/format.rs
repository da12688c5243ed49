//! Display formatting for evaluation results

/// Default number of fractional digits kept after rounding
pub const DEFAULT_FRACTION_DIGITS: usize = 8;

/// Formats a result for the display
///
/// Uses the shortest round-trip decimal form. When that form carries more than
/// `fraction_digits` fractional digits, the value is rounded to that many and
/// trailing zeros (and a dangling point) are stripped. Never produces exponent
/// notation or a negative zero.
#[must_use]
pub fn format_result(value: f64, fraction_digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let shortest = value.to_string();
    let fraction_len = shortest.split_once('.').map_or(0, |(_, frac)| frac.len());
    if fraction_len <= fraction_digits {
        return shortest;
    }

    let rounded = format!("{value:.fraction_digits$}");
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Reads the numeric value of a display string
///
/// Partial entries such as `"5."` are valid. Anything unparseable (the error
/// sentinel) reads as zero.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_point() {
        assert_eq!(format_result(8.0, 8), "8");
        assert_eq!(format_result(-24.0, 8), "-24");
        assert_eq!(format_result(1e20, 8), "100000000000000000000");
    }

    #[test]
    fn test_short_fractions_unchanged() {
        assert_eq!(format_result(2.5, 8), "2.5");
        assert_eq!(format_result(0.125, 8), "0.125");
        assert_eq!(format_result(-0.75, 8), "-0.75");
    }

    #[test]
    fn test_long_fractions_rounded() {
        assert_eq!(format_result(1.0 / 3.0, 8), "0.33333333");
        assert_eq!(format_result(2.0 / 3.0, 8), "0.66666667");
        assert_eq!(format_result(1.123_456_789, 8), "1.12345679");
    }

    #[test]
    fn test_rounding_strips_trailing_zeros() {
        assert_eq!(format_result(0.1 + 0.2, 8), "0.3");
        assert_eq!(format_result(1.000_000_000_1, 8), "1");
    }

    #[test]
    fn test_zero_forms() {
        assert_eq!(format_result(0.0, 8), "0");
        assert_eq!(format_result(-0.0, 8), "0");
        assert_eq!(format_result(1e-9, 8), "0");
        assert_eq!(format_result(-1e-9, 8), "0");
    }

    #[test]
    fn test_custom_fraction_digits() {
        assert_eq!(format_result(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_result(2.0 / 3.0, 0), "1");
    }

    #[test]
    fn test_small_values_not_exponential() {
        assert_eq!(format_result(1e-7, 8), "0.0000001");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("42"), 42.0);
        assert_eq!(parse_display("5."), 5.0);
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("-3.25"), -3.25);
        assert_eq!(parse_display("Error"), 0.0);
        assert_eq!(parse_display("inf"), 0.0);
    }
}
