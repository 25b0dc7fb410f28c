//! Formatting helpers for presenting metrics.

/// Shown in place of a value the backend did not send.
pub const MISSING_VALUE: &str = "—";

/// Renders a number the way the browser would print it: integral values
/// lose their fraction (`1000`, not `1000.0`), and magnitudes of at least
/// `1e21` or below `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return MISSING_VALUE.to_string();
    }
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        return exponent_form(value);
    }
    format!("{value}")
}

/// Shortest mantissa with an explicitly signed exponent.
fn exponent_form(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// `value + suffix`, or the placeholder (without suffix) when absent.
pub fn format_metric(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(number) if number.is_finite() => format!("{}{suffix}", format_number(number)),
        _ => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractional_values_keep_shortest_form() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-3.25), "-3.25");
        assert_eq!(format_number(1234.56), "1234.56");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn exponent_thresholds_match_the_browser() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn metric_appends_suffix() {
        assert_eq!(format_metric(Some(1000.0), "$"), "1000$");
        assert_eq!(format_metric(Some(55.25), "%"), "55.25%");
        assert_eq!(format_metric(Some(7.0), ""), "7");
    }

    #[test]
    fn missing_metric_uses_placeholder() {
        assert_eq!(format_metric(None, "$"), MISSING_VALUE);
        assert_eq!(format_metric(Some(f64::NAN), "%"), MISSING_VALUE);
    }
}
