//! Result formatting - shortest faithful decimal text, hard length cutoff

/// Format an evaluation result for the display.
///
/// Rust's `f64` formatting already produces the shortest decimal text that
/// round-trips, so the only work here is substituting the configured
/// separator and enforcing the length cap. The cap is a plain character
/// cutoff, not rounding: a long fraction may be cut mid-digit.
///
/// Non-finite values ("inf", "-inf", "NaN") pass through unchanged; the
/// calculator has no error channel and shows them as-is.
pub fn format_result(value: f64, max_chars: usize, separator: char) -> String {
    let mut text = value.to_string();
    if separator != '.' {
        text = text.replace('.', &separator.to_string());
    }
    truncate_chars(&text, max_chars)
}

/// Cut a string to at most `max` characters (not bytes).
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
