use crate::domain::models::{JsonOut, ReproReport, StepItem};
use crate::services::probe::{import_snippet, location_snippet, probe_project};
use crate::services::workspace;
use tempfile::TempDir;

/// Reproduce the reported failure inside a throwaway project: a clean
/// install imports fine, a same-named local file or package directory breaks
/// it, and removing the shadow restores the clean behavior.
///
/// Setup failures (`uv init` / `uv add`) abort with an error; unexpected
/// probe outcomes are recorded in the report instead.
pub fn handle_reproduce(json: bool, package: &str, uv: &str) -> anyhow::Result<()> {
    let tmp = TempDir::new()?;
    let project = workspace::project_dir(tmp.path(), package)?;
    let mut steps: Vec<StepItem> = Vec::new();

    note(json, &format!("reproducing module shadowing for `{package}`"));
    note(json, &format!("project: {}", project.display()));

    note(json, &format!("1. initializing project with `{uv} init`"));
    workspace::init_project(uv, &project)?;
    push(json, &mut steps, "init_project", "ok", None);

    note(json, &format!("2. installing {package} with `{uv} add {package}`"));
    workspace::add_dependency(uv, &project, package)?;
    push(json, &mut steps, "add_dependency", "ok", None);

    note(json, "3. probing the import in a clean project");
    let baseline = probe_project(uv, &project, &import_snippet(package));
    push(
        json,
        &mut steps,
        "baseline_probe",
        &baseline.status,
        baseline.location.as_deref(),
    );

    note(json, &format!("4. writing shadow file {package}.py"));
    let shadow_file = workspace::write_shadow_file(&project, package)?;
    push(
        json,
        &mut steps,
        "write_shadow_file",
        "ok",
        Some(&shadow_file.to_string_lossy()),
    );

    note(json, "5. probing the import with the shadow file in place");
    let file_probe = probe_project(uv, &project, &import_snippet(package));
    let file_shadow_reproduced = file_probe.status == "import_failure";
    push(
        json,
        &mut steps,
        "shadow_file_probe",
        &file_probe.status,
        file_probe.error.as_deref(),
    );

    note(json, "6. locating the module the interpreter actually loads");
    let located = probe_project(uv, &project, &location_snippet(package));
    push(
        json,
        &mut steps,
        "shadow_file_location",
        &located.status,
        located.location.as_deref(),
    );

    note(json, "7. removing the shadow file and re-probing");
    workspace::remove_shadow_file(&project, package)?;
    let file_recovery = probe_project(uv, &project, &import_snippet(package));
    push(
        json,
        &mut steps,
        "file_recovery_probe",
        &file_recovery.status,
        file_recovery.location.as_deref(),
    );

    note(json, &format!("8. writing shadow package {package}/__init__.py"));
    let shadow_pkg = workspace::write_shadow_package(&project, package)?;
    push(
        json,
        &mut steps,
        "write_shadow_package",
        "ok",
        Some(&shadow_pkg.to_string_lossy()),
    );

    note(json, "9. probing the import with the shadow package in place");
    let dir_probe = probe_project(uv, &project, &import_snippet(package));
    let dir_shadow_reproduced = dir_probe.status == "import_failure";
    push(
        json,
        &mut steps,
        "shadow_package_probe",
        &dir_probe.status,
        dir_probe.error.as_deref(),
    );

    note(json, "10. removing the shadow package and re-probing");
    workspace::remove_shadow_package(&project, package)?;
    let dir_recovery = probe_project(uv, &project, &import_snippet(package));
    push(
        json,
        &mut steps,
        "package_recovery_probe",
        &dir_recovery.status,
        dir_recovery.location.as_deref(),
    );

    let recovered =
        file_recovery.status == "installed_ok" && dir_recovery.status == "installed_ok";
    let overall = if file_shadow_reproduced && dir_shadow_reproduced && recovered {
        "reproduced"
    } else {
        "inconclusive"
    };

    let report = ReproReport {
        package: package.to_string(),
        project_dir: project.to_string_lossy().to_string(),
        steps,
        file_shadow_reproduced,
        dir_shadow_reproduced,
        recovered,
        overall: overall.to_string(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        println!();
        println!("file shadow reproduced: {}", report.file_shadow_reproduced);
        println!("package-dir shadow reproduced: {}", report.dir_shadow_reproduced);
        println!("recovered after removal: {}", report.recovered);
        println!("overall: {}", report.overall);
        if report.overall == "reproduced" {
            println!();
            println!("not a package-manager bug: a local `{package}.py` file or `{package}/`");
            println!("directory shadows the installed package during import.");
            println!("rename or remove the local artifact to fix the import.");
        }
    }

    Ok(())
}

fn note(json: bool, line: &str) {
    if !json {
        println!("{line}");
    }
}

fn push(json: bool, steps: &mut Vec<StepItem>, name: &str, status: &str, detail: Option<&str>) {
    if !json {
        match detail {
            Some(d) if !d.is_empty() => println!("   {status}: {d}"),
            _ => println!("   {status}"),
        }
    }
    steps.push(StepItem {
        name: name.to_string(),
        status: status.to_string(),
        detail: detail.map(str::to_string),
    });
}
