use crate::domain::constants::INSTALLED_MARKERS;
use crate::domain::models::{ProbeReport, RunOutput};
use crate::services::runner::run_cmd;
use std::path::Path;

/// Import the package and print its source location plus the identifying
/// `__version__` attribute. A shadow artifact makes the attribute access
/// fail even when the import itself succeeds.
pub fn import_snippet(package: &str) -> String {
    format!("import {package}; print({package}.__file__); print({package}.__version__)")
}

/// Import the package and print only its resolved source location.
pub fn location_snippet(package: &str) -> String {
    format!("import {package}; print({package}.__file__)")
}

pub fn is_installed_location(path: &str) -> bool {
    INSTALLED_MARKERS.iter().any(|m| path.contains(m))
}

/// Probe through `uv run` inside the throwaway project.
pub fn probe_project(uv: &str, project_dir: &Path, snippet: &str) -> ProbeReport {
    match run_cmd(uv, &["run", "python", "-c", snippet], project_dir) {
        Ok(out) => classify(&out),
        Err(err) => ProbeReport::unavailable(format!("{err:#}")),
    }
}

/// Probe with a bare interpreter in `cwd`. Stands in for an in-process
/// import: the interpreter resolves the module with its own search path and
/// reports where it loaded from.
pub fn probe_interpreter(python: &str, cwd: &Path, snippet: &str) -> ProbeReport {
    match run_cmd(python, &["-c", snippet], cwd) {
        Ok(out) => classify(&out),
        Err(err) => ProbeReport::unavailable(format!("{err:#}")),
    }
}

/// Classify a probe result. Exit 0 with a location under the installed
/// packages is the healthy case; exit 0 elsewhere means something local won
/// module resolution; non-zero exit is the AttributeError/ImportError class.
pub fn classify(out: &RunOutput) -> ProbeReport {
    if out.code == 0 {
        let mut lines = out.stdout.lines().filter(|l| !l.trim().is_empty());
        let location = lines.next().unwrap_or("").trim().to_string();
        let version = lines.next().map(|l| l.trim().to_string());
        let status = if is_installed_location(&location) {
            "installed_ok"
        } else {
            "shadowed_load"
        };
        ProbeReport {
            status: status.to_string(),
            location: Some(location),
            version,
            error: None,
        }
    } else {
        ProbeReport {
            status: "import_failure".to_string(),
            location: None,
            version: None,
            error: Some(last_line(&out.stderr)),
        }
    }
}

fn last_line(s: &str) -> String {
    s.lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("")
        .trim()
        .to_string()
}
