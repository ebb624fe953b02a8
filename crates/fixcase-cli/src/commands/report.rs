//! Entry and mismatch listings

use std::path::Path;

use fixcase_git::{Prefix, Workspace, mismatches, scan};

use crate::error::Result;

/// List in-scope entries (`-a`) and/or mismatches (`-l`) from one scan.
///
/// The `entry[%d]` and `git file` line formats are a stable contract for
/// scripting consumers.
pub fn run_report(cwd: &Path, all: bool, list: bool) -> Result<()> {
    let workspace = Workspace::discover(cwd)?;
    let prefix = Prefix::compute(workspace.root(), cwd)?;
    tracing::debug!(prefix = prefix.as_str(), "scanning index entries");
    let resolutions = scan(&workspace, &prefix)?;

    if all {
        for r in &resolutions {
            println!("entry[{}]: {} -> {}", r.index, r.logical, r.resolved);
        }
    }

    if list {
        for m in mismatches(&resolutions) {
            println!("git file {} -> {}", m.logical, m.resolved);
        }
    }

    Ok(())
}
