use std::path::PathBuf;
use anyhow::{bail, Result};
use colored::Colorize;
use gostrap::cloner::clone_packages;
use gostrap::fetcher::fetch_target;
use gostrap::manifest::BootstrapConfig;
use gostrap::releases::fetch_releases;
use gostrap::shellenv::{rc_file, render_block, upsert_block};
use gostrap::toolchain::{export_environment, install};
use gostrap::workspace::{ensure_src_dir, resolve_workspace};
use crate::cli::{GostrapCommand, CLI};

pub fn execute(cli: CLI) -> Result<()> {
    match cli.command {
        GostrapCommand::Setup { version, workspace, skip_fetch } => {
            execute_setup(version, workspace, skip_fetch)
        }
        GostrapCommand::Install { version } => {
            execute_install(version)
        }
        GostrapCommand::Clone { workspace } => {
            execute_clone(workspace)
        }
        GostrapCommand::Fetch => {
            execute_fetch()
        }
        GostrapCommand::List { verbose } => {
            execute_list(verbose)
        }
        GostrapCommand::Releases { all } => {
            execute_releases(all)
        }
        GostrapCommand::Init => {
            execute_init()
        }
    }
}

fn load_config() -> Result<BootstrapConfig> {
    let cwd = std::env::current_dir()?;
    Ok(BootstrapConfig::load_or_default(cwd.join("gostrap.toml")))
}

pub fn execute_setup(
    version: Option<String>,
    workspace: Option<PathBuf>,
    skip_fetch: bool,
) -> Result<()> {
    let config = load_config()?;
    let version = match version {
        Some(version) => version,
        None => config.version()?.to_string(),
    };

    println!("{} go-{}", "installing".green().bold(), version);
    let goroot = install(&version)?;
    println!("  toolchain root: {}", goroot.display());

    let workspace = resolve_workspace(workspace, Some(&goroot))?;
    println!("  workspace root: {}", workspace.display());
    export_environment(&goroot, &workspace);
    upsert_block(&rc_file()?, &render_block(&goroot, &workspace))?;

    let srcdir = ensure_src_dir(&workspace)?;
    println!("{} {} dependencies", "cloning".green().bold(), config.packages.len());
    clone_packages(&config.packages, &srcdir)?;

    if skip_fetch {
        println!("{}", "done (fetch skipped)".green());
        return Ok(());
    }
    println!("{} {}", "fetching".green().bold(), config.toolchain.fetch);
    fetch_target(Some(&goroot), &config.toolchain.fetch)?;
    println!("{}", "done".green());
    Ok(())
}

pub fn execute_install(version: Option<String>) -> Result<()> {
    let config = load_config()?;
    let version = match version {
        Some(version) => version,
        None => config.version()?.to_string(),
    };

    println!("{} go-{}", "installing".green().bold(), version);
    let goroot = install(&version)?;
    let workspace = resolve_workspace(None, Some(&goroot))?;
    export_environment(&goroot, &workspace);
    upsert_block(&rc_file()?, &render_block(&goroot, &workspace))?;
    println!("  toolchain root: {}", goroot.display());
    println!("  workspace root: {}", workspace.display());
    Ok(())
}

pub fn execute_clone(workspace: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    let workspace = resolve_workspace(workspace, None)?;
    let srcdir = ensure_src_dir(&workspace)?;
    clone_packages(&config.packages, &srcdir)
}

pub fn execute_fetch() -> Result<()> {
    let config = load_config()?;
    println!("{} {}", "fetching".green().bold(), config.toolchain.fetch);
    fetch_target(None, &config.toolchain.fetch)
}

pub fn execute_list(verbose: bool) -> Result<()> {
    let config = load_config()?;
    if config.packages.is_empty() {
        println!("No dependencies");
        return Ok(());
    }

    let srcdir = match verbose {
        true => resolve_workspace(None, None).ok().map(|w| w.join("src")),
        false => None,
    };
    for entry in &config.packages {
        println!("{}: {}", entry.path, entry.repo);
        if let Some(srcdir) = &srcdir {
            match srcdir.join(&entry.path).is_dir() {
                true => println!("   {}", "present".green()),
                false => println!("   {}", "missing".yellow()),
            }
        }
    }
    Ok(())
}

pub fn execute_releases(all: bool) -> Result<()> {
    let releases = fetch_releases(all)?;
    for release in releases {
        let stability = match release.stable {
            true => "stable".green(),
            false => "unstable".yellow(),
        };
        match release.linux_amd64_archive() {
            Some(filename) => println!("{} ({})\n  {}", release.version, stability, filename),
            None => println!("{} ({})", release.version, stability),
        }
    }
    Ok(())
}

pub fn execute_init() -> Result<()> {
    let path = std::env::current_dir()?.join("gostrap.toml");
    if path.exists() {
        bail!("gostrap.toml already exists");
    }
    BootstrapConfig::default().save(&path)?;
    println!("wrote {}", path.display());
    Ok(())
}
