use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use anyhow::{bail, Context, Result};
use crate::util::{install_root, is_valid_version};

/// Base of the official Go download mirror. Only the linux-amd64 archive is
/// supported; there is no platform negotiation.
const DOWNLOAD_BASE: &str = "https://go.dev/dl";

/// Returns the archive URL for a toolchain version, e.g.
/// `https://go.dev/dl/go1.22.5.linux-amd64.tar.gz`.
pub fn archive_url(version: &str) -> String {
    format!("{}/go{}.linux-amd64.tar.gz", DOWNLOAD_BASE, version)
}

/// Downloads and unpacks the requested Go release under the per-user
/// install root and returns the toolchain root (the `go` directory inside
/// the extraction target).
///
/// The archive is streamed straight from the HTTP response into an external
/// `tar` process; nothing is verified beyond the HTTP status (no checksum,
/// no content type).
///
/// # Errors
/// Returns an error if the version string is invalid, the download fails,
/// the destination directory cannot be created, or `tar` exits non-zero.
pub fn install(version: &str) -> Result<PathBuf> {
    if !is_valid_version(version) {
        bail!("Invalid toolchain version: {}", version);
    }
    let dest = install_root(version)?;
    std::fs::create_dir_all(&dest)
        .with_context(|| format!("Could not create install root {:?}", dest))?;

    let url = archive_url(version);
    let response = reqwest::blocking::get(&url)
        .with_context(|| format!("Could not download {}", url))?;
    if !response.status().is_success() {
        bail!("Failed to download {}: HTTP {}", url, response.status());
    }
    extract_stream(response, &dest)?;

    // the archive unpacks into a single top-level `go` directory
    Ok(dest.join("go"))
}

/// Pipes an archive stream into `tar zxf -` running in `dest`.
fn extract_stream<R: io::Read>(mut archive: R, dest: &Path) -> Result<()> {
    let mut child = Command::new("tar")
        .args(["zxf", "-"])
        .current_dir(dest)
        .stdin(Stdio::piped())
        .spawn()
        .context("Could not spawn tar")?;

    let mut stdin = child.stdin.take()
        .context("tar stdin was not piped")?;
    io::copy(&mut archive, &mut stdin)
        .context("Could not stream archive into tar")?;
    drop(stdin);

    let status = child.wait()?;
    if !status.success() {
        bail!("tar exited with {}", status);
    }
    Ok(())
}

/// Exports GOROOT, GOPATH and an updated PATH into the current process so
/// the remaining steps and their child processes see the new toolchain.
/// PATH gets the toolchain and workspace bin directories prepended, in that
/// order.
pub fn export_environment(goroot: &Path, workspace: &Path) {
    let path = std::env::var("PATH").unwrap_or_default();
    let new_path = format!(
        "{}:{}:{}",
        goroot.join("bin").display(),
        workspace.join("bin").display(),
        path,
    );
    // No threads are running yet; the whole bootstrap is sequential.
    unsafe {
        std::env::set_var("GOROOT", goroot);
        std::env::set_var("GOPATH", workspace);
        std::env::set_var("PATH", &new_path);
    }
}
