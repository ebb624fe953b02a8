//! Reconciliation commands

use std::path::Path;

use colored::Colorize;
use fixcase_git::{
    Mismatch, Prefix, ReconcileOutcome, ReconcileStatus, Workspace, adopt_filesystem_casing,
    adopt_index_casing, mismatches, scan,
};

use crate::error::Result;

/// Adopt the filesystem's casing into the index (`-f`).
pub fn run_fix_index(cwd: &Path) -> Result<()> {
    let workspace = Workspace::discover(cwd)?;
    let prefix = Prefix::compute(workspace.root(), cwd)?;
    let found = mismatches(&scan(&workspace, &prefix)?);

    let outcomes = adopt_filesystem_casing(&workspace, &found)?;
    for outcome in &outcomes {
        report(outcome, |m| {
            format!("renaming git file {} -> {}", m.logical, m.resolved)
        });
    }

    Ok(())
}

/// Adopt the index's casing onto the filesystem (`-g`).
pub fn run_fix_filesystem(cwd: &Path) -> Result<()> {
    let workspace = Workspace::discover(cwd)?;
    let prefix = Prefix::compute(workspace.root(), cwd)?;
    let found = mismatches(&scan(&workspace, &prefix)?);

    let outcomes = adopt_index_casing(&workspace, &found);
    for outcome in &outcomes {
        report(outcome, |m| {
            format!("renaming file {} -> {}", m.resolved, m.logical)
        });
    }

    Ok(())
}

/// Print the stable action line for applied entries and a stderr warning
/// for everything else, so partial application is visible, not swallowed.
fn report(outcome: &ReconcileOutcome, line: impl Fn(&Mismatch) -> String) {
    let m = &outcome.mismatch;
    match &outcome.status {
        ReconcileStatus::Applied => println!("{}", line(m)),
        ReconcileStatus::SkippedMissingTarget => {
            eprintln!(
                "{}: {} has no on-disk counterpart; skipped",
                "warning".yellow().bold(),
                m.logical
            );
        }
        ReconcileStatus::SkippedTrackedTarget => {
            eprintln!(
                "{}: {} is already tracked; left {} untouched",
                "warning".yellow().bold(),
                m.resolved,
                m.logical
            );
        }
        ReconcileStatus::Failed { message } => {
            println!("{}", line(m));
            eprintln!("{}: {}: {}", "warning".yellow().bold(), m.logical, message);
        }
    }
}
