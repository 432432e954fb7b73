use crate::services::runner::run_cmd;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Create the throwaway project directory inside `base` (a scoped temp dir
/// owned by the caller).
pub fn project_dir(base: &Path, package: &str) -> anyhow::Result<PathBuf> {
    let dir = base.join(format!("repro-{package}"));
    std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn init_project(uv: &str, dir: &Path) -> anyhow::Result<()> {
    let out = run_cmd(uv, &["init"], dir)?;
    if out.code != 0 {
        anyhow::bail!("`{uv} init` failed: {}", failure_detail(&out.stderr));
    }
    Ok(())
}

pub fn add_dependency(uv: &str, dir: &Path, package: &str) -> anyhow::Result<()> {
    let out = run_cmd(uv, &["add", package], dir)?;
    if out.code != 0 {
        anyhow::bail!("`{uv} add {package}` failed: {}", failure_detail(&out.stderr));
    }
    Ok(())
}

/// Write a same-named module file that wins resolution over the installed
/// package.
pub fn write_shadow_file(dir: &Path, package: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(format!("{package}.py"));
    std::fs::write(&path, format!("# shadows the installed {package} package\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

pub fn remove_shadow_file(dir: &Path, package: &str) -> anyhow::Result<()> {
    let path = dir.join(format!("{package}.py"));
    std::fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
    Ok(())
}

/// Write a same-named package directory with an initializer file.
pub fn write_shadow_package(dir: &Path, package: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(package);
    std::fs::create_dir_all(&path).with_context(|| format!("create {}", path.display()))?;
    std::fs::write(
        path.join("__init__.py"),
        format!("# shadows the installed {package} package\n"),
    )
    .with_context(|| format!("write {}/__init__.py", path.display()))?;
    Ok(path)
}

pub fn remove_shadow_package(dir: &Path, package: &str) -> anyhow::Result<()> {
    let path = dir.join(package);
    std::fs::remove_dir_all(&path).with_context(|| format!("remove {}", path.display()))?;
    Ok(())
}

fn failure_detail(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("no stderr")
        .trim()
        .to_string()
}
