use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CLI {
    #[command(subcommand)]
    pub(crate) command: GostrapCommand,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum GostrapCommand {
    /// Runs the whole bootstrap: install toolchain, prepare workspace, clone dependencies, fetch the target package
    Setup {
        /// Override the toolchain version pinned in `gostrap.toml`
        #[clap(long)]
        version: Option<String>,
        /// Override the workspace root (otherwise $GOPATH, otherwise `go env GOPATH`)
        #[clap(long)]
        workspace: Option<PathBuf>,
        /// Stop after cloning; do not run the final `go get`
        #[clap(long)]
        skip_fetch: bool,
    },
    /// Installs the Go toolchain only
    Install {
        /// Override the toolchain version pinned in `gostrap.toml`
        #[clap(long)]
        version: Option<String>,
    },
    /// Clones the manifest dependencies into the workspace `src` directory
    Clone {
        /// Override the workspace root
        #[clap(long)]
        workspace: Option<PathBuf>,
    },
    /// Runs `go get` for the target package from `gostrap.toml`
    Fetch,
    /// Lists the dependency manifest
    List {
        /// Also show whether each entry is present on disk
        #[clap(short, long)]
        verbose: bool,
    },
    /// Lists published Go releases from the official download feed
    Releases {
        /// Include unstable releases
        #[clap(long)]
        all: bool,
    },
    /// Writes a default `gostrap.toml` to the current directory
    Init,
}
