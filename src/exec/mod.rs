use anyhow::{bail, Context, Result};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawn `program args..`, write `input` to its stdin, close it and wait.
/// Stdout is discarded; stderr ends up in the error on a non-zero exit.
pub fn pipe_to_command(program: &Path, args: &[&str], input: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {}", program.display()))?;

    {
        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("no stdin handle for {}", program.display()))?;
        stdin
            .write_all(input.as_bytes())
            .with_context(|| format!("failed to write to {}", program.display()))?;
    }

    let out = child
        .wait_with_output()
        .with_context(|| format!("failed to wait for {}", program.display()))?;

    if !out.status.success() {
        bail!(
            "{} exited with {}:\nSTDERR:\n{}",
            program.display(),
            out.status.code().unwrap_or_default(),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(())
}

/// Run `program args..` with inherited stdio (interactive tools such as editors).
pub fn run_interactive<I, S>(program: &str, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to spawn {}", program))?;
    if !status.success() {
        bail!("{} exited with {}", program, status.code().unwrap_or_default());
    }
    Ok(status.code().unwrap_or_default())
}
