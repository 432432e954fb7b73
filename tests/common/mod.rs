use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment: its own HOME, a working directory to diagnose,
/// a fake installed-packages tree, and a bin dir for fixture shims.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub workdir: PathBuf,
    pub site_packages: PathBuf,
    pub extra_dir: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let workdir = tmp.path().join("work");
        let site_packages = tmp.path().join("venv/lib/python3.12/site-packages");
        let extra_dir = tmp.path().join("extra");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&workdir).expect("create workdir");
        fs::create_dir_all(site_packages.join("cffi")).expect("create installed package");
        fs::write(site_packages.join("cffi/__init__.py"), "").expect("write installed init");
        fs::create_dir_all(&extra_dir).expect("create extra search dir");
        fs::create_dir_all(&bin).expect("create bin dir");

        Self {
            _tmp: tmp,
            home,
            workdir,
            site_packages,
            extra_dir,
            bin,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("unshadow").expect("binary built");
        cmd.env("HOME", &self.home).current_dir(&self.workdir);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let assert = self.cmd().arg("--json").args(args).assert();
        let out = assert.get_output().stdout.clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_cwd_shadow_file(&self) -> PathBuf {
        let path = self.workdir.join("cffi.py");
        fs::write(&path, "# shadow\n").expect("write shadow file");
        path
    }

    pub fn write_cwd_shadow_package(&self) -> PathBuf {
        let path = self.workdir.join("cffi");
        fs::create_dir_all(&path).expect("create shadow package");
        fs::write(path.join("__init__.py"), "# shadow\n").expect("write shadow init");
        path
    }

    /// Minimal uv stand-in: `init`/`add` succeed, `run python -c` emulates
    /// the interpreter's module lookup against the project directory.
    pub fn fake_uv(&self) -> PathBuf {
        let path = self.bin.join("uv");
        write_executable(
            &path,
            r#"#!/bin/sh
case "$1" in
  init|add)
    exit 0
    ;;
  run)
    code="$4"
    if [ -f cffi.py ]; then
      loaded="$PWD/cffi.py"
    elif [ -f cffi/__init__.py ]; then
      loaded="$PWD/cffi/__init__.py"
    else
      loaded="/fake/venv/lib/python3.12/site-packages/cffi/__init__.py"
    fi
    case "$code" in
      *__version__*)
        case "$loaded" in
          *site-packages*)
            echo "$loaded"
            echo "2.0.0"
            exit 0
            ;;
          *)
            echo "AttributeError: module 'cffi' has no attribute '__version__'" >&2
            exit 1
            ;;
        esac
        ;;
      *)
        echo "$loaded"
        exit 0
        ;;
    esac
    ;;
esac
exit 0
"#,
        );
        path
    }

    /// uv stand-in whose `init` fails, for the setup-failure path.
    pub fn failing_uv(&self) -> PathBuf {
        let path = self.bin.join("uv-failing");
        write_executable(
            &path,
            r#"#!/bin/sh
if [ "$1" = "init" ]; then
  echo "error: failed to initialize project" >&2
  exit 2
fi
exit 0
"#,
        );
        path
    }

    /// Fake interpreter: reports a fixed sys.path (the fake site-packages
    /// plus one extra searchable directory) and emulates module lookup
    /// rooted at the working directory.
    pub fn fake_python(&self) -> PathBuf {
        let path = self.bin.join("python3");
        let script = format!(
            r#"#!/bin/sh
code="$2"
case "$code" in
  *sys.path*)
    echo "{site}"
    echo "{extra}"
    exit 0
    ;;
esac
if [ -f cffi.py ]; then
  loaded="$PWD/cffi.py"
elif [ -f cffi/__init__.py ]; then
  loaded="$PWD/cffi/__init__.py"
else
  loaded="{site}/cffi/__init__.py"
fi
case "$code" in
  *__version__*)
    case "$loaded" in
      *site-packages*)
        echo "$loaded"
        echo "2.0.0"
        exit 0
        ;;
      *)
        echo "AttributeError: module 'cffi' has no attribute '__version__'" >&2
        exit 1
        ;;
    esac
    ;;
  *)
    echo "$loaded"
    exit 0
    ;;
esac
"#,
            site = self.site_packages.display(),
            extra = self.extra_dir.display(),
        );
        write_executable(&path, &script);
        path
    }
}

fn write_executable(path: &Path, script: &str) {
    fs::write(path, script).expect("write fixture shim");
    let mut perms = fs::metadata(path).expect("shim metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("mark shim executable");
}
