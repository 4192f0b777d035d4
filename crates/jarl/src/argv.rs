//! Splitting the free-form `opts` string into interpreter arguments.

use crate::scan::skip_whitespace;

/// Split an options string into whitespace-delimited arguments, the way a
/// shell-less launcher builds an argv.
///
/// Only the literal space character separates arguments; a tab or newline on
/// its own is part of its token. After a space separator the cursor skips
/// the full whitespace class (space, tab, CR, LF), so runs of separators
/// collapse and a separator with nothing after it produces no empty trailing
/// argument. `None` or an all-whitespace string yields an empty vector.
pub fn split_args(text: Option<&str>) -> Vec<&str> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut rest = skip_whitespace(text);
    let mut args = Vec::new();
    while !rest.is_empty() {
        match rest.find(' ') {
            Some(idx) => {
                args.push(&rest[..idx]);
                rest = skip_whitespace(&rest[idx + 1..]);
            }
            None => {
                args.push(rest);
                break;
            }
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_yield_no_args() {
        assert!(split_args(None).is_empty());
        assert!(split_args(Some("")).is_empty());
        assert!(split_args(Some("   ")).is_empty());
        assert!(split_args(Some(" \t \r\n ")).is_empty());
    }

    #[test]
    fn single_token() {
        assert_eq!(split_args(Some("-ea")), vec!["-ea"]);
    }

    #[test]
    fn consecutive_spaces_collapse() {
        assert_eq!(split_args(Some("a  b   c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn leading_and_trailing_separators_are_dropped() {
        assert_eq!(split_args(Some("  -Xmx512m -ea ")), vec!["-Xmx512m", "-ea"]);
    }

    #[test]
    fn lone_tab_does_not_split() {
        // Only the space character is a separator. A tab trailing a space is
        // swallowed by the separator, but a tab inside a token stays.
        assert_eq!(split_args(Some("a\tb c")), vec!["a\tb", "c"]);
        assert_eq!(split_args(Some("a \tb")), vec!["a", "b"]);
    }

    #[test]
    fn join_then_split_round_trips() {
        let tokens = vec!["-Xms256m", "-Xmx1024m", "-ea", "--enable-preview"];
        let joined = tokens.join(" ");
        assert_eq!(split_args(Some(&joined)), tokens);
    }
}
