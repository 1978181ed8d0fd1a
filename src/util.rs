use std::path::PathBuf;
use anyhow::{anyhow, Result};
use directories::BaseDirs;
use semver::Version;

/// Returns the current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| anyhow!("Could not determine the home directory"))?;
    Ok(dirs.home_dir().to_path_buf())
}

/// Returns the per-user directory a toolchain version is unpacked into,
/// e.g. `~/.gostrap/go-1.22.5`.
pub fn install_root(version: &str) -> Result<PathBuf> {
    Ok(home_dir()?.join(".gostrap").join(format!("go-{}", version)))
}

/// Validates a Go toolchain version string.
///
/// Go releases use `major.minor` or `major.minor.patch` (e.g. `1.9`, `1.22.5`).
/// Two-component versions are padded with `.0` so SemVer can parse them.
pub fn is_valid_version(version: &str) -> bool {
    let padded = match version.chars().filter(|c| *c == '.').count() {
        1 => format!("{}.0", version),
        _ => version.to_string(),
    };
    Version::parse(&padded).is_ok()
}
