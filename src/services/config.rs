use crate::domain::constants::{DEFAULT_PACKAGE, DEFAULT_PYTHON, DEFAULT_UV, UV_ENV_VAR};
use crate::domain::models::ConfigFile;
use std::path::PathBuf;

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/unshadow/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn resolve_package(flag: Option<&str>, config: &ConfigFile) -> String {
    flag.map(str::to_string)
        .or_else(|| config.defaults.package.clone())
        .unwrap_or_else(|| DEFAULT_PACKAGE.to_string())
}

/// Flag wins, then the `UV_BINARY` environment override, then the config
/// file, then plain `uv` from PATH.
pub fn resolve_uv(flag: Option<&str>, config: &ConfigFile) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var(UV_ENV_VAR).ok())
        .or_else(|| config.defaults.uv.clone())
        .unwrap_or_else(|| DEFAULT_UV.to_string())
}

pub fn resolve_python(flag: Option<&str>, config: &ConfigFile) -> String {
    flag.map(str::to_string)
        .or_else(|| config.defaults.python.clone())
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string())
}
