/// Import name probed when `--package` is not given. Matches the package
/// from the original report.
pub const DEFAULT_PACKAGE: &str = "cffi";

/// Environment override for the uv binary used by reproduction.
pub const UV_ENV_VAR: &str = "UV_BINARY";

pub const DEFAULT_UV: &str = "uv";
pub const DEFAULT_PYTHON: &str = "python3";

/// Path components identifying the installed-packages location. Entries
/// under these are never flagged as shadows.
pub const INSTALLED_MARKERS: [&str; 2] = ["site-packages", "dist-packages"];
