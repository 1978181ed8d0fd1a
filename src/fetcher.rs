use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use anyhow::{bail, Context, Result};

/// Runs `go get -v` for the target package with the user's terminal attached,
/// so clone/build progress is visible as it happens.
///
/// When a toolchain root is known (right after an install) the `go` binary is
/// addressed explicitly underneath it; otherwise whatever `go` is on the PATH
/// is used. A non-zero exit is fatal.
pub fn fetch_target(goroot: Option<&Path>, target: &str) -> Result<()> {
    let program = match goroot {
        Some(root) => root.join("bin").join("go").into_os_string(),
        None => OsString::from("go"),
    };
    let status = Command::new(&program)
        .args(["get", "-v", target])
        .status()
        .with_context(|| format!("Could not run {:?}", program))?;
    if !status.success() {
        bail!("go get -v {} exited with {}", target, status);
    }
    Ok(())
}
