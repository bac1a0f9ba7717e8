//! Raw form input coercion.
//!
//! Numeric quote fields arrive as whatever the user typed. They are never
//! rejected: anything that is not a number becomes `0`, so the calculator
//! always has a finite value to work with.

/// Parses user-typed numeric input, falling back to `0.0`.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12 kg"` reads as `12`. Empty, non-numeric and non-finite input give `0.0`.
///
/// ## Example
/// ```rust
/// use acerler_core::input::parse_number;
///
/// assert_eq!(parse_number("150.75"), 150.75);
/// assert_eq!(parse_number("  3e2"), 300.0);
/// assert_eq!(parse_number("12abc"), 12.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("abc"), 0.0);
/// ```
pub fn parse_number(raw: &str) -> f64 {
    let text = raw.trim_start();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return 0.0;
    }

    match text[..end].parse::<f64>() {
        // `-0` collapses to 0 as well
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

/// Coerces an already-numeric value: NaN and infinities become `0.0`.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run, or 0 when
/// there is no mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // exponent only counts when digits follow it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
