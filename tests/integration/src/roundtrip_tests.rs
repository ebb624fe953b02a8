//! End-to-end missions across detection and both reconciliation
//! directions, driving the public crate APIs the way the CLI does.

use fixcase_fs::{NormalizedPath, resolve_casing};
use fixcase_git::{
    Mismatch, Prefix, ReconcileStatus, Workspace, adopt_filesystem_casing, adopt_index_casing,
    mismatches, scan,
};
use fixcase_test_utils::CaseRepo;

fn detect(repo: &CaseRepo) -> (Workspace, Vec<Mismatch>) {
    let ws = Workspace::discover(repo.root()).unwrap();
    let found = mismatches(&scan(&ws, &Prefix::repository_root()).unwrap());
    (ws, found)
}

/// Adopt-index-casing renames `src/main.java` back to `Src/Main.java`,
/// after which resolution returns the logical path unchanged.
#[test]
fn test_roundtrip_adopt_index_casing() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("Src/Main.java", "src/main.java", "class Main {}");

    let (ws, found) = detect(&repo);
    assert_eq!(found.len(), 1);
    let outcomes = adopt_index_casing(&ws, &found);
    assert!(outcomes.iter().all(|o| o.status == ReconcileStatus::Applied));

    let resolved = resolve_casing(ws.root(), &NormalizedPath::new("Src/Main.java"));
    assert_eq!(resolved.as_str(), "Src/Main.java");
}

/// After a successful adopt-filesystem-casing pass, a fresh detection over
/// the same repository yields no mismatches.
#[test]
fn test_adopt_filesystem_casing_then_detection_is_empty() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("Doc/ReadMe.md", "doc/readme.md", "r");
    repo.tracked_with_casing("Lib/Mod.rs", "lib/mod.rs", "m");
    repo.tracked_with_casing("ok.txt", "ok.txt", "k");

    let (ws, found) = detect(&repo);
    assert_eq!(found.len(), 2);
    let outcomes = adopt_filesystem_casing(&ws, &found).unwrap();
    assert!(outcomes.iter().all(|o| o.status == ReconcileStatus::Applied));

    let (_ws, found) = detect(&repo);
    assert!(found.is_empty(), "expected no mismatches, got {found:?}");
}

/// Same idempotence property for the filesystem direction, with entries
/// sharing a parent directory whose casing also has to change.
#[test]
fn test_adopt_index_casing_then_detection_is_empty() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("Deep/Nested/Tree/One.txt", "deep/nested/tree/one.txt", "1");
    repo.tracked_with_casing("Deep/Nested/Tree/Two.txt", "deep/nested/tree/two.txt", "2");

    let (ws, found) = detect(&repo);
    assert_eq!(found.len(), 2);
    let outcomes = adopt_index_casing(&ws, &found);
    assert!(outcomes.iter().all(|o| o.status == ReconcileStatus::Applied));

    let (_ws, found) = detect(&repo);
    assert!(found.is_empty(), "expected no mismatches, got {found:?}");
}

/// Mixed batch: a real mismatch is applied while a missing target is
/// skipped, and the skip leaves the entry tracked.
#[test]
fn test_mixed_batch_partial_application_is_reported() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("Real.txt", "real.txt", "r");
    repo.stage_entry("Ghost.txt", "boo");

    let (ws, found) = detect(&repo);
    assert_eq!(found.len(), 2);
    let outcomes = adopt_filesystem_casing(&ws, &found).unwrap();

    let statuses: Vec<_> = outcomes
        .iter()
        .map(|o| (o.mismatch.logical.as_str(), o.status.clone()))
        .collect();
    assert!(statuses.contains(&("Real.txt", ReconcileStatus::Applied)));
    assert!(statuses.contains(&("Ghost.txt", ReconcileStatus::SkippedMissingTarget)));

    let paths = repo.index_paths();
    assert!(paths.contains(&"Ghost.txt".to_string()));
    assert!(paths.contains(&"real.txt".to_string()));
    assert!(!paths.contains(&"Real.txt".to_string()));
}

/// The committed history survives reconciliation untouched; only the index
/// is restaged.
#[test]
fn test_adopt_filesystem_casing_preserves_history() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("Src/App.rs", "src/app.rs", "fn main() {}");
    repo.commit("initial");

    let (ws, found) = detect(&repo);
    adopt_filesystem_casing(&ws, &found).unwrap();

    let head = repo.repo().head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some("initial"));
    assert_eq!(repo.index_paths(), vec!["src/app.rs".to_string()]);
}
