//! Mismatch detection between index casing and on-disk casing

use fixcase_fs::{NormalizedPath, resolve_casing};

use crate::{Prefix, Result, Workspace};

/// One index entry paired with its on-disk resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryResolution {
    /// Position of the entry in the index, preserved for listings.
    pub index: usize,
    /// The path as recorded by the index.
    pub logical: NormalizedPath,
    /// The path as found on disk; a strict prefix when resolution stopped
    /// short.
    pub resolved: NormalizedPath,
}

impl EntryResolution {
    /// Whether recorded and on-disk casing disagree.
    pub fn is_mismatch(&self) -> bool {
        self.logical != self.resolved
    }
}

/// A tracked path whose on-disk casing differs from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub logical: NormalizedPath,
    pub resolved: NormalizedPath,
}

impl Mismatch {
    /// A resolution that stopped short of full depth: the entry has no
    /// case-insensitive counterpart on disk. Reconciliation must not treat
    /// this as "found under a different casing": there is nothing to
    /// adopt or rename.
    pub fn is_missing_target(&self) -> bool {
        self.resolved.depth() < self.logical.depth()
    }
}

/// Resolve every in-scope index entry against the working tree.
///
/// Entries outside `prefix` are excluded entirely. Resolution is anchored
/// at the repository root over the full logical path, so listings always
/// show root-relative paths. The scan reflects the filesystem and index
/// state at this moment only; it is recomputed fresh on every invocation.
pub fn scan(workspace: &Workspace, prefix: &Prefix) -> Result<Vec<EntryResolution>> {
    let tracked = workspace.tracked_paths()?;
    let mut resolutions = Vec::new();

    for (index, logical) in tracked.into_iter().enumerate() {
        if !prefix.contains(&logical) {
            continue;
        }
        let resolved = resolve_casing(workspace.root(), &logical);
        tracing::debug!(entry = index, logical = %logical, resolved = %resolved, "resolved entry");
        resolutions.push(EntryResolution {
            index,
            logical,
            resolved,
        });
    }

    Ok(resolutions)
}

/// The mismatched subset of a scan, in entry order.
pub fn mismatches(resolutions: &[EntryResolution]) -> Vec<Mismatch> {
    resolutions
        .iter()
        .filter(|r| r.is_mismatch())
        .map(|r| Mismatch {
            logical: r.logical.clone(),
            resolved: r.resolved.clone(),
        })
        .collect()
}
