//! Permissive, locale-agnostic number parsing for raw text-entry input

/// Parse the longest numeric prefix of `text`
///
/// Leading whitespace is skipped; anything after the number is ignored.
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` and `[+-]Infinity`.
/// Text with no numeric prefix is a missing value, never an error.
///
/// ```
/// use contracts::shared::number_parse::parse_number;
///
/// assert_eq!(parse_number(" 12.5kg"), Some(12.5));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_end = skip_digits(bytes, end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_end = skip_digits(bytes, exp_end);
        if digits_end > exp_end {
            end = digits_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}
