use std::fs;
use std::fs::OpenOptions;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use anyhow::Result;
use regex::{NoExpand, Regex};
use crate::util::home_dir;

/// First line of the export block persisted to the shell startup file.
pub const BLOCK_BEGIN: &str = "### gostrap environment (begin)";
/// Last line of the export block.
pub const BLOCK_END: &str = "### gostrap environment (end)";

/// Returns the shell startup file the exports are persisted to (`~/.bashrc`).
pub fn rc_file() -> Result<PathBuf> {
    Ok(home_dir()?.join(".bashrc"))
}

/// Renders the marked export block for the given toolchain and workspace
/// roots. The block is exactly what lands in the startup file, markers
/// included.
pub fn render_block(goroot: &Path, workspace: &Path) -> String {
    format!(
        "{begin}\nexport GOROOT=\"{goroot}\"\nexport GOPATH=\"{gopath}\"\nexport PATH=$GOROOT/bin:$GOPATH/bin:$PATH\n{end}\n",
        begin = BLOCK_BEGIN,
        goroot = goroot.display(),
        gopath = workspace.display(),
        end = BLOCK_END,
    )
}

/// Writes the export block into the startup file.
///
/// If a previously written marked block exists it is replaced in place, so
/// re-running the bootstrap never stacks duplicates. Otherwise the block is
/// appended (creating the file if needed); everything already in the file is
/// left untouched.
///
/// # Errors
/// Returns an error if the file can't be read or written.
pub fn upsert_block(rc: &Path, block: &str) -> Result<()> {
    let existing = if rc.exists() {
        fs::read_to_string(rc)?
    }
    else {
        String::new()
    };

    let marked = Regex::new(&format!(
        r"(?s){}.*?{}",
        regex::escape(BLOCK_BEGIN),
        regex::escape(BLOCK_END),
    ))?;
    if marked.is_match(&existing) {
        // NoExpand: the exports contain literal `$PATH`-style references
        let updated = marked.replace(&existing, NoExpand(block.trim_end()));
        fs::write(rc, updated.as_ref())?;
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(rc)?;
    // append mode already places the cursor at the end
    file.seek(SeekFrom::End(0))?;
    write!(file, "\n{}", block)?;
    Ok(())
}
