use serde::Deserialize;
use anyhow::{bail, Result};

/// One published Go release, as reported by the official download feed.
#[derive(Debug, Deserialize)]
pub struct GoRelease {
    /// The release tag, e.g. `"go1.22.5"`.
    pub version: String,
    /// Whether the release line is currently supported.
    pub stable: bool,
    /// The downloadable files for this release.
    #[serde(default)]
    pub files: Vec<ReleaseFile>,
}

/// One downloadable file belonging to a release.
#[derive(Debug, Deserialize, Default)]
pub struct ReleaseFile {
    /// The archive or installer file name.
    pub filename: String,
    /// Target operating system (empty for source archives).
    #[serde(default)]
    pub os: String,
    /// Target architecture (empty for source archives).
    #[serde(default)]
    pub arch: String,
    /// File kind: `"archive"`, `"installer"` or `"source"`.
    #[serde(default)]
    pub kind: String,
}

impl GoRelease {
    /// Returns the linux-amd64 archive file name for this release, if the
    /// feed lists one. That is the only target the installer downloads.
    pub fn linux_amd64_archive(&self) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.os == "linux" && f.arch == "amd64" && f.kind == "archive")
            .map(|f| f.filename.as_str())
    }
}

/// Fetches the list of published Go releases from the official feed at
/// `https://go.dev/dl/?mode=json`.
///
/// # Arguments
///
/// * `all` – When `true`, include historic and unstable releases instead of
///   just the currently supported lines.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched or parsed.
pub fn fetch_releases(all: bool) -> Result<Vec<GoRelease>> {
    let url = if all {
        "https://go.dev/dl/?mode=json&include=all"
    }
    else {
        "https://go.dev/dl/?mode=json"
    };
    let response = reqwest::blocking::get(url)?;

    if !response.status().is_success() {
        bail!("Failed to fetch the release feed: HTTP {}", response.status());
    }
    let releases: Vec<GoRelease> = response.json()?;
    Ok(releases)
}
