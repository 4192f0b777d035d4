//! jarl launches a JVM to handle the command represented by the name of the
//! executable it was invoked as.
//!
//! An optional sidecar file next to the executable, named after it with a
//! `.cfg` extension, supplies the interpreter path (`exec`), a free-form
//! options string (`opts`), and the JAR to run (`jar`); each falls back to a
//! compiled-in default. The launcher then replaces itself with
//! `<exec> <opts...> -jar <jar> <own args...>`.

pub mod argv;
pub mod config;
pub mod name;
pub(crate) mod scan;

pub use argv::split_args;
pub use config::find_value;
pub use name::{remove_extension, with_extension};

/// Config key naming the interpreter executable.
pub const KEY_EXEC: &str = "exec";
/// Config key holding the free-form interpreter options string.
pub const KEY_OPTS: &str = "opts";
/// Config key naming the JAR handed to the interpreter.
pub const KEY_JAR: &str = "jar";

pub const DEFAULT_EXEC: &str = "java";
pub const DEFAULT_OPTS: &str = "";
pub const DEFAULT_JAR: &str = "app.jar";

/// When set (1/true/yes), the launcher prints the resolved command line to
/// stderr before handing off.
pub const ENV_DEBUG: &str = "JARL_DEBUG";

pub fn debug_enabled() -> bool {
    match std::env::var(ENV_DEBUG) {
        Ok(raw) => matches!(raw.trim(), "1" | "true" | "TRUE" | "yes" | "YES"),
        Err(_) => false,
    }
}
