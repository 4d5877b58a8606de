//! Numeric coercion and formatting helpers.

/// Parses the longest leading decimal number in `s`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"2.5rem"` parses as `2.5`. Returns `NaN` when no number is present.
///
/// # Example
///
/// ```rust
/// use textcard::parse_float;
///
/// assert_eq!(parse_float(" 1.5 "), 1.5);
/// assert_eq!(parse_float("4px"), 4.0);
/// assert!(parse_float("px").is_nan());
/// ```
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let rest = &s[end..];
    if rest.starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts if at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Returns the value if it is finite and strictly positive.
///
/// This is the presence rule for optional numeric options: `NaN`, infinities,
/// zero and negatives all mean "not set".
pub fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Returns the value if finite, otherwise zero.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Formats a number in its shortest round-trip form.
///
/// Integral values have no fractional part (`2`, not `2.0`) and negative
/// zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("2"), 2.0);
        assert_eq!(parse_float("0.5"), 0.5);
        assert_eq!(parse_float("-3.25"), -3.25);
        assert_eq!(parse_float(".75"), 0.75);
        assert_eq!(parse_float("5."), 5.0);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("12px"), 12.0);
        assert_eq!(parse_float("  1.5rem"), 1.5);
        assert_eq!(parse_float("1e2x"), 100.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_float_invalid() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive(1.5), Some(1.5));
        assert_eq!(positive(0.0), None);
        assert_eq!(positive(-1.0), None);
        assert_eq!(positive(f64::NAN), None);
        assert_eq!(positive(f64::INFINITY), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-2.5), "-2.5");
    }
}
