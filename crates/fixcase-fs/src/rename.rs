//! Case-safe renames for filesystem reconciliation
//!
//! A direct rename of `a.txt` to `A.txt` fails or no-ops on a
//! case-insensitive filesystem because source and destination alias the
//! same directory entry. Every rename here therefore goes through a
//! scratch name, which succeeds on either filesystem flavor.

use std::fs;
use std::path::Path;

use crate::{Error, NormalizedPath, Result, resolve::find_entry};

/// Outcome of a casing repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    /// Every component already carried the requested casing.
    Unchanged,
    /// At least one component was renamed.
    Renamed,
    /// A component had no case-insensitive match; the walk stopped after
    /// `prefix` and nothing past it was touched.
    Missing { prefix: NormalizedPath },
}

/// Rename on-disk entries so that every component of `logical` under `root`
/// matches the logical casing exactly, intermediate directories included.
///
/// Each component is re-resolved against the live directory listing, so
/// repairs made earlier in a batch (a parent directory shared by several
/// entries, say) are observed as already correct instead of raced against.
pub fn repair_casing(root: &Path, logical: &NormalizedPath) -> Result<Repair> {
    let mut dir = root.to_path_buf();
    let mut walked = NormalizedPath::empty();
    let mut renamed = false;

    for component in logical.components() {
        let Some(actual) = find_entry(&dir, component) else {
            return Ok(Repair::Missing { prefix: walked });
        };
        if actual != component {
            rename_entry(&dir, &actual, component)?;
            renamed = true;
        }
        dir.push(component);
        walked.push(component);
    }

    Ok(if renamed {
        Repair::Renamed
    } else {
        Repair::Unchanged
    })
}

/// Whether `parent` holds an entry spelled exactly `name`.
fn entry_exists_exact(parent: &Path, name: &str) -> bool {
    match fs::read_dir(parent) {
        Ok(entries) => entries
            .flatten()
            .any(|e| e.file_name().to_string_lossy() == name),
        Err(_) => false,
    }
}

/// Two-phase rename of one directory entry.
///
/// `from` and `to` are sibling names under `parent` differing only by case.
/// The entry moves to a scratch name first, then to `to`; if the second hop
/// fails the first is rolled back so the entry is never left under the
/// scratch name.
fn rename_entry(parent: &Path, from: &str, to: &str) -> Result<()> {
    // Both casings existing as distinct entries means a case-sensitive
    // filesystem holds two objects; renaming over one would destroy it.
    if entry_exists_exact(parent, to) {
        return Err(Error::DestinationExists {
            path: parent.join(to),
        });
    }

    let scratch = format!(".{}.{}.casefix", from, std::process::id());
    let from_path = parent.join(from);
    let scratch_path = parent.join(&scratch);
    let to_path = parent.join(to);

    fs::rename(&from_path, &scratch_path).map_err(|e| Error::io(&from_path, e))?;
    if let Err(e) = fs::rename(&scratch_path, &to_path) {
        let _ = fs::rename(&scratch_path, &from_path);
        return Err(Error::io(&to_path, e));
    }

    tracing::debug!(parent = %parent.display(), from, to, "renamed directory entry");
    Ok(())
}
