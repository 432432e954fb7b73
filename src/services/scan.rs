use crate::domain::models::ShadowFinding;
use crate::services::probe::is_installed_location;
use crate::services::runner::run_cmd;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Shadow artifacts for `package` directly inside `dir`: a same-named
/// module file, or a same-named directory carrying an initializer.
pub fn shadow_candidates(dir: &Path, package: &str, origin: &str) -> Vec<ShadowFinding> {
    let mut findings = Vec::new();

    let file = dir.join(format!("{package}.py"));
    if file.is_file() {
        findings.push(ShadowFinding {
            path: file.to_string_lossy().to_string(),
            kind: "file".to_string(),
            origin: origin.to_string(),
        });
    }

    let pkg_dir = dir.join(package);
    if pkg_dir.is_dir() && pkg_dir.join("__init__.py").is_file() {
        findings.push(ShadowFinding {
            path: pkg_dir.to_string_lossy().to_string(),
            kind: "package_dir".to_string(),
            origin: origin.to_string(),
        });
    }

    findings
}

/// Ask the interpreter for its module search path, one entry per line.
/// Callers degrade to an empty list when the interpreter is unavailable.
pub fn interpreter_search_path(python: &str, cwd: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let out = run_cmd(python, &["-c", "import sys; print('\\n'.join(sys.path))"], cwd)?;
    if out.code != 0 {
        anyhow::bail!("interpreter exited with status {}", out.code);
    }
    Ok(out
        .stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Scan the working directory plus every searchable directory for shadows.
/// Entries under an installed-packages location are never flagged, and
/// duplicate paths are reported once.
pub fn scan_for_shadows(cwd: &Path, search_path: &[PathBuf], package: &str) -> Vec<ShadowFinding> {
    let mut findings = shadow_candidates(cwd, package, "cwd");
    let mut seen: HashSet<String> = findings.iter().map(|f| f.path.clone()).collect();

    for dir in search_path {
        if dir == cwd || is_installed_location(&dir.to_string_lossy()) || !dir.is_dir() {
            continue;
        }
        for finding in shadow_candidates(dir, package, "search_path") {
            if seen.insert(finding.path.clone()) {
                findings.push(finding);
            }
        }
    }

    findings
}
