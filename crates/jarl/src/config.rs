//! Line-oriented `key = value` lookup over the sidecar config contents.

use crate::scan::{is_scan_whitespace, skip_to_next_line, skip_whitespace};

/// Find the value of a key/value pair in the config file contents.
///
/// Example config:
///
/// ```text
/// exec = /usr/bin/java
/// opts = -Xmx512m
/// jar = run.jar
/// ```
///
/// The scan is a single left-to-right pass, case-sensitive, first match
/// wins. A key matches only when the cursor text starts with exactly `name`
/// and the next non-whitespace character after it is `=`; a key that is a
/// prefix of a longer token does not match, and the scan moves on to the
/// next line. `None` config (missing or unreadable file) returns `default`,
/// as does a config in which no line satisfies the key.
///
/// A present key with an empty or all-whitespace value yields `""`, not
/// `default`.
pub fn find_value<'a>(config: Option<&'a str>, name: &str, default: &'a str) -> &'a str {
    let Some(config) = config else {
        return default;
    };

    let mut cur = skip_whitespace(config);
    while !cur.is_empty() {
        if let Some(after_name) = cur.strip_prefix(name) {
            let after_ws = skip_whitespace(after_name);
            if let Some(after_eq) = after_ws.strip_prefix('=') {
                return trim_to_eol(after_eq);
            }
        }
        cur = skip_to_next_line(cur);
    }

    default
}

/// The matched value: everything from just after `=` to the end of that line
/// (or end of input), with surrounding whitespace trimmed.
fn trim_to_eol(s: &str) -> &str {
    let line = match s.find('\n') {
        Some(idx) => &s[..idx],
        None => s,
    };
    line.trim_matches(is_scan_whitespace)
}
