use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Captured result of one external command. `code` is -1 when the process
/// was killed by a signal.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Serialize)]
pub struct StepItem {
    pub name: String,
    pub status: String,
    pub detail: Option<String>,
}

/// A file or directory that wins module resolution over the installed
/// package. `kind` is `file` or `package_dir`; `origin` is `cwd` or
/// `search_path`.
#[derive(Debug, Clone, Serialize)]
pub struct ShadowFinding {
    pub path: String,
    pub kind: String,
    pub origin: String,
}

/// Classified outcome of one import probe.
///
/// `status` is one of `installed_ok`, `shadowed_load`, `import_failure`,
/// `interpreter_unavailable`.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub status: String,
    pub location: Option<String>,
    pub version: Option<String>,
    pub error: Option<String>,
}

impl ProbeReport {
    pub fn unavailable(error: String) -> Self {
        Self {
            status: "interpreter_unavailable".to_string(),
            location: None,
            version: None,
            error: Some(error),
        }
    }
}

#[derive(Serialize)]
pub struct ReproReport {
    pub package: String,
    pub project_dir: String,
    pub steps: Vec<StepItem>,
    pub file_shadow_reproduced: bool,
    pub dir_shadow_reproduced: bool,
    pub recovered: bool,
    pub overall: String,
}

#[derive(Serialize)]
pub struct DiagnoseReport {
    pub package: String,
    pub cwd: String,
    pub search_path: Vec<String>,
    pub findings: Vec<ShadowFinding>,
    pub probe: ProbeReport,
    pub remediation: Vec<String>,
    pub issues: usize,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigDefaults {
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub uv: Option<String>,
    #[serde(default)]
    pub python: Option<String>,
}
