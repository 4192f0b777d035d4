//! Cursor helpers shared by the config scanner and the options tokenizer.

/// The scanner's whitespace class: space, tab, CR, LF.
pub(crate) fn is_scan_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub(crate) fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_scan_whitespace)
}

/// Advance past the next newline, or to the end of input when none remains.
pub(crate) fn skip_to_next_line(s: &str) -> &str {
    match s.find('\n') {
        Some(idx) => &s[idx + 1..],
        None => "",
    }
}
