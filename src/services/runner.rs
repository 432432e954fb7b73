use crate::domain::models::RunOutput;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

/// Run an external command in `cwd` and capture its result as text.
///
/// A non-zero exit is not an error; callers inspect `RunOutput.code`. Only a
/// spawn failure (missing binary, permission) surfaces as `Err`.
pub fn run_cmd(program: &str, args: &[&str], cwd: &Path) -> anyhow::Result<RunOutput> {
    let out = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .with_context(|| format!("failed to spawn `{program}`"))?;

    Ok(RunOutput {
        code: out.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
}
