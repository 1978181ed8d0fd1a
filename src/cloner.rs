use std::path::Path;
use std::process::Command;
use anyhow::{bail, Context, Result};
use crate::manifest::PackageEntry;

/// History depth passed to every clone. Enough for the course material,
/// small enough to keep the transfers short.
pub const CLONE_DEPTH: u32 = 5;

/// What `clone_package` did for one manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneOutcome {
    /// The repository was cloned.
    Cloned,
    /// A populated checkout already existed; nothing was run.
    Skipped,
}

/// Returns the argument vector for cloning one entry, relative to the
/// workspace `src` root.
pub fn clone_args(entry: &PackageEntry) -> Vec<String> {
    vec![
        String::from("clone"),
        format!("--depth={}", CLONE_DEPTH),
        format!("https://{}", entry.repo),
        entry.path.clone(),
    ]
}

/// Materializes one manifest entry under the workspace `src` root.
///
/// An existing non-empty target directory is skipped without spawning
/// anything, which is what makes reruns cheap. An existing but EMPTY target
/// is treated as the leftover of an interrupted clone and fails loudly; the
/// user removes it and reruns. The same goes for a non-directory squatting
/// on the target path. A clone failure surfaces the subprocess output
/// verbatim and is fatal.
pub fn clone_package(entry: &PackageEntry, srcdir: &Path) -> Result<CloneOutcome> {
    let target = srcdir.join(&entry.path);
    if target.is_dir() {
        let mut entries = std::fs::read_dir(&target)
            .with_context(|| format!("Could not inspect {:?}", target))?;
        if entries.next().is_none() {
            bail!(
                "{:?} exists but is empty (interrupted clone?); remove it and rerun",
                target
            );
        }
        return Ok(CloneOutcome::Skipped);
    }
    if target.exists() {
        bail!(
            "{:?} exists but is not a directory; remove it and rerun",
            target
        );
    }

    let args = clone_args(entry);
    let output = Command::new("git")
        .args(&args)
        .current_dir(srcdir)
        .output()
        .context("Could not run git")?;
    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        eprintln!("{}", combined);
        bail!("git {} exited with {}", args.join(" "), output.status);
    }
    Ok(CloneOutcome::Cloned)
}

/// Clones every manifest entry in declaration order, one at a time.
pub fn clone_packages(packages: &[PackageEntry], srcdir: &Path) -> Result<()> {
    for entry in packages {
        match clone_package(entry, srcdir)? {
            CloneOutcome::Cloned => println!("cloned {}", entry.path),
            CloneOutcome::Skipped => println!("skipped {} (already present)", entry.path),
        }
    }
    Ok(())
}
