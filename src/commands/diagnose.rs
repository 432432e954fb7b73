use crate::domain::models::{DiagnoseReport, JsonOut};
use crate::services::probe::{import_snippet, probe_interpreter};
use crate::services::scan::{interpreter_search_path, scan_for_shadows};

/// Inspect the current directory and the interpreter's search path for
/// shadowing artifacts, attempt the import probe, and report findings with
/// remediation hints. Reads only; never writes to the inspected directories.
///
/// Returns the number of issues found, which becomes the process exit
/// status.
pub fn handle_diagnose(json: bool, package: &str, python: &str) -> anyhow::Result<usize> {
    let cwd = std::env::current_dir()?;

    // Interpreter unavailable -> pure filesystem inspection of the cwd.
    let search_path = interpreter_search_path(python, &cwd).unwrap_or_default();
    let findings = scan_for_shadows(&cwd, &search_path, package);
    let probe = probe_interpreter(python, &cwd, &import_snippet(package));

    let remediation: Vec<String> = findings
        .iter()
        .map(|f| format!("rename or remove {}", f.path))
        .collect();
    let issues = findings.len();

    let report = DiagnoseReport {
        package: package.to_string(),
        cwd: cwd.to_string_lossy().to_string(),
        search_path: search_path
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        findings,
        probe,
        remediation,
        issues,
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &report
            })?
        );
    } else {
        println!("package: {}", report.package);
        println!("cwd: {}", report.cwd);
        for f in &report.findings {
            println!("shadow:{}\t{}\t{}", f.kind, f.origin, f.path);
        }
        match (&report.probe.location, &report.probe.error) {
            (Some(location), _) => println!("probe: {}\t{}", report.probe.status, location),
            (None, Some(error)) => println!("probe: {}\t{}", report.probe.status, error),
            (None, None) => println!("probe: {}", report.probe.status),
        }
        for r in &report.remediation {
            println!("- {r}");
        }
        println!("issues: {}", report.issues);
    }

    Ok(issues)
}
