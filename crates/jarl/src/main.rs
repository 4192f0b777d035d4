use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use jarl::{
    debug_enabled, find_value, remove_extension, split_args, with_extension, DEFAULT_EXEC,
    DEFAULT_JAR, DEFAULT_OPTS, KEY_EXEC, KEY_JAR, KEY_OPTS,
};

fn main() -> ExitCode {
    match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}; aborting.");
            ExitCode::from(1)
        }
    }
}

fn try_main() -> Result<ExitCode> {
    // The launcher's own path determines both the command name and where the
    // JAR and the optional config file live.
    let exe = std::env::current_exe().context("locate launcher executable")?;
    let exe_dir = exe
        .parent()
        .context("launcher executable has no containing directory")?;
    let command = exe
        .file_name()
        .and_then(|n| n.to_str())
        .context("launcher executable has no usable file name")?;

    let cfg_path = exe_dir.join(with_extension(remove_extension(command), ".cfg"));
    let cfg = read_config(&cfg_path);
    let cfg = cfg.as_deref();

    let exec = find_value(cfg, KEY_EXEC, DEFAULT_EXEC);
    let opts = find_value(cfg, KEY_OPTS, DEFAULT_OPTS);
    let jar = find_value(cfg, KEY_JAR, DEFAULT_JAR);

    // Relative jar paths resolve against the launcher's directory; an
    // absolute value stands alone.
    let jar_path = exe_dir.join(jar);

    let mut cmd = std::process::Command::new(exec);
    cmd.args(split_args(Some(opts)));
    cmd.arg("-jar");
    cmd.arg(&jar_path);
    cmd.args(std::env::args_os().skip(1));

    if debug_enabled() {
        eprintln!(
            "jarl: config {} ({})",
            cfg_path.display(),
            if cfg.is_some() { "loaded" } else { "absent" }
        );
        eprintln!("jarl: handing off to {cmd:?}");
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt as _;
        let err = cmd.exec();
        Err(err).with_context(|| format!("exec {exec}"))
    }
    #[cfg(not(unix))]
    {
        let status = cmd.status().with_context(|| format!("spawn {exec}"))?;
        match status.code() {
            Some(code) => Ok(ExitCode::from(u8::try_from(code).unwrap_or(1))),
            None => Ok(ExitCode::from(1)),
        }
    }
}

/// Read the sidecar config. A missing or unreadable file is not an error;
/// the compiled-in defaults cover it.
fn read_config(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}
