//! Directional casing correction
//!
//! Both strategies consume the mismatch set from a single scan as one
//! batch. Entries are processed independently; a failure on one entry is
//! recorded in its outcome and the rest of the batch continues.

use std::collections::HashSet;

use fixcase_fs::{Repair, repair_casing};

use crate::{Mismatch, Result, Workspace};

/// What happened to one mismatch during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub mismatch: Mismatch,
    pub status: ReconcileStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileStatus {
    /// The correction was applied.
    Applied,
    /// The resolved path stopped short of full depth; there is nothing on
    /// disk to adopt or rename, and untracking the entry blindly would
    /// lose it.
    SkippedMissingTarget,
    /// The resolved path is already tracked under a different logical
    /// entry; adopting it would collapse two tracked entries into one.
    SkippedTrackedTarget,
    /// The action failed; the message identifies the cause.
    Failed { message: String },
}

/// Re-point index entries at the casing found on disk.
///
/// For each full-depth mismatch the logical entry is removed from the
/// index and the resolved path staged in its place (content staging only;
/// the working tree is untouched). The index is written once at the end
/// when anything was staged.
pub fn adopt_filesystem_casing(
    workspace: &Workspace,
    mismatches: &[Mismatch],
) -> Result<Vec<ReconcileOutcome>> {
    // Also grows with each staged target, so two mismatches resolving to
    // the same on-disk path cannot both be restaged onto one entry.
    let mut tracked: HashSet<String> = workspace
        .tracked_paths()?
        .into_iter()
        .map(|p| p.as_str().to_string())
        .collect();

    let mut index = workspace.repo().index()?;
    let mut outcomes = Vec::with_capacity(mismatches.len());
    let mut staged = 0usize;

    for mismatch in mismatches {
        let status = if mismatch.is_missing_target() {
            tracing::warn!(
                logical = %mismatch.logical,
                "no on-disk counterpart; leaving entry tracked"
            );
            ReconcileStatus::SkippedMissingTarget
        } else if tracked.contains(mismatch.resolved.as_str()) {
            tracing::warn!(
                logical = %mismatch.logical,
                resolved = %mismatch.resolved,
                "resolved path is already tracked; skipping"
            );
            ReconcileStatus::SkippedTrackedTarget
        } else {
            match restage(&mut index, mismatch) {
                Ok(()) => {
                    staged += 1;
                    tracked.insert(mismatch.resolved.as_str().to_string());
                    ReconcileStatus::Applied
                }
                Err(e) => {
                    tracing::warn!(logical = %mismatch.logical, error = %e, "restage failed");
                    ReconcileStatus::Failed {
                        message: e.message().to_string(),
                    }
                }
            }
        };
        outcomes.push(ReconcileOutcome {
            mismatch: mismatch.clone(),
            status,
        });
    }

    if staged > 0 {
        index.write()?;
    }

    Ok(outcomes)
}

fn restage(index: &mut git2::Index, mismatch: &Mismatch) -> std::result::Result<(), git2::Error> {
    index.remove_path(mismatch.logical.as_ref())?;
    index.add_path(mismatch.resolved.as_ref())?;
    Ok(())
}

/// Rename on-disk objects to the casing recorded in the index.
///
/// Repair is component-wise and re-resolves each component against the
/// live directory listing, so a parent directory renamed for one entry is
/// seen as already correct by later entries instead of failing their walk.
/// Intermediate directory casing is corrected along with the leaf.
pub fn adopt_index_casing(workspace: &Workspace, mismatches: &[Mismatch]) -> Vec<ReconcileOutcome> {
    let mut outcomes = Vec::with_capacity(mismatches.len());

    for mismatch in mismatches {
        let status = if mismatch.is_missing_target() {
            tracing::warn!(
                logical = %mismatch.logical,
                "no on-disk counterpart; nothing to rename"
            );
            ReconcileStatus::SkippedMissingTarget
        } else {
            match repair_casing(workspace.root(), &mismatch.logical) {
                Ok(Repair::Renamed) | Ok(Repair::Unchanged) => ReconcileStatus::Applied,
                Ok(Repair::Missing { prefix }) => {
                    tracing::warn!(
                        logical = %mismatch.logical,
                        reached = %prefix,
                        "entry vanished before repair"
                    );
                    ReconcileStatus::SkippedMissingTarget
                }
                Err(e) => {
                    tracing::warn!(logical = %mismatch.logical, error = %e, "rename failed");
                    ReconcileStatus::Failed {
                        message: e.to_string(),
                    }
                }
            }
        };
        outcomes.push(ReconcileOutcome {
            mismatch: mismatch.clone(),
            status,
        });
    }

    outcomes
}
