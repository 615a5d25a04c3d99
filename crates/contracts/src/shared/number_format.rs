//! Fixed-notation formatting for the result display

/// Format `value` with exactly `decimals` digits after the point
///
/// A value that rounds to zero never keeps its sign ("-0.00" becomes "0.00").
/// Non-finite values print as "Infinity", "-Infinity" or "NaN".
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let formatted = format!("{:.*}", decimals, value);
    match formatted.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_string(),
        _ => formatted,
    }
}
