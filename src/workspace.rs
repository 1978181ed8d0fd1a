use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use anyhow::{bail, Context, Result};

/// Resolves the workspace root.
///
/// Resolution order: the explicit override (CLI flag), then the `GOPATH`
/// environment variable, then a `go env GOPATH` query. The query addresses
/// the `go` binary under `goroot` when one is given (right after an install,
/// before the PATH exports are persisted anywhere), otherwise whatever `go`
/// is on the PATH. Fails if none of the three yields a non-empty path.
pub fn resolve_workspace(explicit: Option<PathBuf>, goroot: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Ok(gopath) = std::env::var("GOPATH") {
        if !gopath.is_empty() {
            return Ok(PathBuf::from(gopath));
        }
    }
    query_toolchain_workspace(goroot)
}

/// Asks the toolchain for its default workspace root.
fn query_toolchain_workspace(goroot: Option<&Path>) -> Result<PathBuf> {
    let program = match goroot {
        Some(root) => root.join("bin").join("go").into_os_string(),
        None => OsString::from("go"),
    };
    let output = Command::new(&program)
        .args(["env", "GOPATH"])
        .output()
        .with_context(|| format!("Could not run {:?} env GOPATH; is the toolchain installed?", program))?;
    if !output.status.success() {
        bail!("`go env GOPATH` exited with {}", output.status);
    }
    let gopath = String::from_utf8(output.stdout)?.trim().to_string();
    if gopath.is_empty() {
        bail!("Could not resolve a workspace root: GOPATH is unset and `go env GOPATH` returned nothing");
    }
    Ok(PathBuf::from(gopath))
}

/// Creates the `src` directory beneath the workspace root, tolerating
/// pre-existence, and returns its path.
pub fn ensure_src_dir(workspace: &Path) -> Result<PathBuf> {
    let srcdir = workspace.join("src");
    std::fs::create_dir_all(&srcdir)
        .with_context(|| format!("Could not create source directory {:?}", srcdir))?;
    Ok(srcdir)
}
