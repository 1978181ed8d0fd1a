//! # Gostrap Core Library
//!
//! This crate contains the building blocks of the `gostrap` tool – a one-shot bootstrapper
//! that sets up a complete Go teaching environment in a single run.
//!
//! `gostrap` downloads a pinned Go toolchain release, unpacks it into a per-user directory,
//! exports the environment (process-wide and persisted to the shell startup file), clones a
//! fixed manifest of source dependencies into the workspace, and finally fetches one target
//! application package with `go get`.
//!
//! This library is built for the `gostrap` CLI, but you can also reuse the individual steps
//! in other setup tooling.
//!
//! ## Modules Overview
//! - [`manifest`] – Parsing and serialization of `gostrap.toml` (toolchain pin + dependency manifest)
//! - [`toolchain`] – Downloading and extracting the Go distribution, process environment exports
//! - [`shellenv`] – The marked export block in the user's shell startup file
//! - [`workspace`] – Workspace root resolution and `src` directory setup
//! - [`cloner`] – Sequential shallow clones of the manifest entries
//! - [`fetcher`] – The final `go get` invocation
//! - [`releases`] – Listing published Go releases from the official download feed
//! - [`util`] – Shared utilities (paths, version validation)


pub mod manifest;
pub mod toolchain;
pub mod shellenv;
pub mod workspace;
pub mod cloner;
pub mod fetcher;
pub mod releases;
pub mod util;

pub use manifest::*;
pub use toolchain::*;
pub use shellenv::*;
pub use workspace::*;
pub use cloner::*;
pub use fetcher::*;
pub use releases::*;
pub use util::*;
