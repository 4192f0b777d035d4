//! Extension handling for command file names.
//!
//! These work on the *first* dot in the name, deliberately unlike
//! `Path::with_extension` (last dot): the launcher treats everything after
//! the first dot as decoration (`xec.exe` and `xec` both map to `xec.cfg`).

/// The portion of `file` before its first `.`, or all of it when it has none.
pub fn remove_extension(file: &str) -> &str {
    match file.find('.') {
        Some(idx) => &file[..idx],
        None => file,
    }
}

/// Replace everything from the first `.` onward (or append, when there is no
/// `.`) with `.` plus `ext`. A leading `.` on `ext` is ignored.
pub fn with_extension(file: &str, ext: &str) -> String {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    format!("{}.{}", remove_extension(file), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_extension_cuts_at_first_dot() {
        assert_eq!(remove_extension("foo.txt"), "foo");
        assert_eq!(remove_extension("foo.tar.gz"), "foo");
        assert_eq!(remove_extension("foo"), "foo");
        assert_eq!(remove_extension(""), "");
    }

    #[test]
    fn with_extension_normalizes_the_dot() {
        assert_eq!(with_extension("foo.txt", ".cfg"), "foo.cfg");
        assert_eq!(with_extension("foo", "cfg"), "foo.cfg");
        assert_eq!(with_extension("foo.tar.gz", "cfg"), "foo.cfg");
        assert_eq!(with_extension("xec.exe", ".cfg"), "xec.cfg");
    }
}
