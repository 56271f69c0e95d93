//! Normalization of untyped amounts coming from form-style input.
//!
//! This is the only place where text becomes numbers. Everything downstream
//! (balances, settlements, summaries) sees finite `f64` values only.
//!
//! The rules are deliberately tolerant, the input usually comes straight from
//! a text field:
//! - the longest leading numeric prefix is used (`"12.5abc"` is `12.5`)
//! - anything without a numeric prefix is `0`
//! - non-finite values (`NaN`, infinities) are `0`
//! - negative values are kept as they are, no clamping

/// Parses a user-entered amount, returning `0.0` for anything non-numeric.
///
/// Accepts an optional sign, digits with an optional fractional part and an
/// optional exponent. Surrounding whitespace is ignored. Only `.` is a decimal
/// separator, so `"10,5"` reads as `10`.
///
/// # Examples
///
/// ```rust
/// use engine::amount::parse_amount;
///
/// assert_eq!(parse_amount("12.50"), 12.5);
/// assert_eq!(parse_amount(" 7 "), 7.0);
/// assert_eq!(parse_amount("3.5kg"), 3.5);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let prefix = numeric_prefix(trimmed);
    if prefix.is_empty() {
        return 0.0;
    }
    prefix.parse::<f64>().map(normalize_amount).unwrap_or(0.0)
}

/// Maps non-finite values to `0.0` and leaves finite values untouched.
#[must_use]
pub fn normalize_amount(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Returns the longest prefix of `s` that reads as a decimal number, or an
/// empty string when there is none.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone `.` is only part of the number when some digit surrounds it.
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

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

    &s[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
