use std::path::Path;
use serde::{Deserialize, Serialize};
use anyhow::{bail, Result};
use crate::util::is_valid_version;

/// Represents the contents of a `gostrap.toml` file.
///
/// This includes the toolchain pin and the ordered manifest of source
/// dependencies to materialize in the workspace.
#[derive(Deserialize, Serialize, Debug)]
pub struct BootstrapConfig {
    /// The toolchain to install and the final package to fetch with it.
    pub toolchain: Toolchain,
    /// The dependency manifest, cloned in declaration order.
    #[serde(rename = "package", default)]
    pub packages: Vec<PackageEntry>,
}

/// The pinned toolchain release and fetch target.
#[derive(Deserialize, Serialize, Debug)]
pub struct Toolchain {
    /// The Go release to install (e.g. `"1.22.5"`).
    pub version: String,
    /// The package passed to the final `go get` (import-path form).
    pub fetch: String,
}

/// One dependency to materialize on disk.
///
/// `path` is the directory relative to the workspace `src` root; `repo` is
/// the remote repository in `host/owner/name` form (the clone step adds the
/// `https://` scheme). The two differ whenever an import path is served from
/// a mirror, e.g. `golang.org/x/net` cloned from `github.com/golang/net`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PackageEntry {
    /// Local path relative to the workspace `src` directory.
    pub path: String,
    /// Remote repository, scheme-less.
    pub repo: String,
}

impl Default for BootstrapConfig {
    fn default() -> BootstrapConfig {
        BootstrapConfig {
            toolchain: Toolchain {
                version: String::from("1.22.5"),
                fetch: String::from("github.com/master-pfa-info/mcpi"),
            },
            packages: vec![
                PackageEntry::new("bitbucket.org/zombiezen/gopdf", "github.com/master-pfa-info/gopdf"),
                PackageEntry::new("go-hep.org/x/hep", "github.com/go-hep/hep"),
                PackageEntry::new("golang.org/x/exp", "github.com/golang/exp"),
                PackageEntry::new("golang.org/x/image", "github.com/golang/image"),
                PackageEntry::new("golang.org/x/mobile", "github.com/golang/mobile"),
                PackageEntry::new("golang.org/x/net", "github.com/golang/net"),
                PackageEntry::new("gonum.org/v1/plot", "github.com/gonum/plot"),
                PackageEntry::new("gonum.org/v1/gonum", "github.com/gonum/gonum"),
            ],
        }
    }
}

impl PackageEntry {
    pub fn new(path: &str, repo: &str) -> PackageEntry {
        PackageEntry {
            path: String::from(path),
            repo: String::from(repo),
        }
    }
}

impl BootstrapConfig {
    /// Loads a `BootstrapConfig` from a file path.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or deserialized.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BootstrapConfig> {
        let toml = std::fs::read_to_string(path)?;
        toml::from_str(&toml).map_err(|e| e.into())
    }
    /// Loads the config from the given path, falling back to the built-in
    /// defaults if the file does not exist or cannot be parsed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> BootstrapConfig {
        if path.as_ref().exists() {
            let content = std::fs::read_to_string(path).unwrap_or_default();
            toml::from_str(&content).unwrap_or_default()
        }
        else {
            BootstrapConfig::default()
        }
    }
    /// Saves the `BootstrapConfig` to the given file path in pretty TOML format.
    ///
    /// # Errors
    /// Returns an error if the file can't be written or serialization fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
    /// Returns the toolchain version, validated.
    ///
    /// # Errors
    /// Returns an error if the pinned version is not a valid Go release string.
    pub fn version(&self) -> Result<&str> {
        if !is_valid_version(&self.toolchain.version) {
            bail!("Invalid toolchain version: {}", self.toolchain.version);
        }
        Ok(&self.toolchain.version)
    }
}
