//! Detection over fixtures whose index casing differs from disk casing.

use fixcase_git::{Error, Prefix, Workspace, mismatches, scan};
use fixcase_test_utils::CaseRepo;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_scan_reports_exact_match_without_mismatch() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("README.md", "README.md", "hello");

    let ws = Workspace::discover(repo.root()).unwrap();
    let resolutions = scan(&ws, &Prefix::repository_root()).unwrap();

    assert_eq!(resolutions.len(), 1);
    assert_eq!(resolutions[0].index, 0);
    assert!(!resolutions[0].is_mismatch());
    assert!(mismatches(&resolutions).is_empty());
}

#[test]
fn test_scan_detects_casing_mismatch() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("Src/Main.java", "src/main.java", "class Main {}");

    let ws = Workspace::discover(repo.root()).unwrap();
    let found = mismatches(&scan(&ws, &Prefix::repository_root()).unwrap());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].logical.as_str(), "Src/Main.java");
    assert_eq!(found[0].resolved.as_str(), "src/main.java");
    assert!(!found[0].is_missing_target());
}

#[test]
fn test_untracked_sibling_casings_do_not_mismatch() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("notes.txt", "notes.txt", "n");

    let ws = Workspace::discover(repo.root()).unwrap();
    let found = mismatches(&scan(&ws, &Prefix::repository_root()).unwrap());
    assert!(found.is_empty());
}

#[test]
fn test_entry_without_on_disk_counterpart_is_missing_target() {
    let repo = CaseRepo::new();
    repo.stage_entry("docs/guide.md", "text");

    let ws = Workspace::discover(repo.root()).unwrap();
    let found = mismatches(&scan(&ws, &Prefix::repository_root()).unwrap());

    assert_eq!(found.len(), 1);
    assert!(found[0].resolved.is_empty());
    assert!(found[0].is_missing_target());
}

#[test]
fn test_partially_resolvable_entry_keeps_walked_prefix() {
    let repo = CaseRepo::new();
    repo.write_file("a/present.txt", "x");
    repo.stage_entry("A/b/c.txt", "y");

    let ws = Workspace::discover(repo.root()).unwrap();
    let found = mismatches(&scan(&ws, &Prefix::repository_root()).unwrap());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].resolved.as_str(), "a");
    assert!(found[0].is_missing_target());
}

#[test]
fn test_prefix_scopes_entries_to_invocation_directory() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("sub/File.txt", "sub/file.txt", "a");
    repo.tracked_with_casing("other/File.txt", "other/file.txt", "b");

    let ws = Workspace::discover(repo.root()).unwrap();
    let prefix = Prefix::compute(ws.root(), &repo.root().join("sub")).unwrap();
    let found = mismatches(&scan(&ws, &prefix).unwrap());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].logical.as_str(), "sub/File.txt");
}

#[test]
fn test_prefix_does_not_match_sibling_directory_by_string_prefix() {
    let repo = CaseRepo::new();
    repo.tracked_with_casing("sub/File.txt", "sub/file.txt", "a");
    repo.tracked_with_casing("subdir/File.txt", "subdir/file.txt", "b");

    let ws = Workspace::discover(repo.root()).unwrap();
    let prefix = Prefix::compute(ws.root(), &repo.root().join("sub")).unwrap();
    let found = mismatches(&scan(&ws, &prefix).unwrap());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].logical.as_str(), "sub/File.txt");
}

#[test]
fn test_prefix_at_root_is_empty() {
    let repo = CaseRepo::new();
    let ws = Workspace::discover(repo.root()).unwrap();

    let prefix = Prefix::compute(ws.root(), repo.root()).unwrap();
    assert!(prefix.is_empty());
}

#[test]
fn test_prefix_outside_repository_is_an_error() {
    let repo = CaseRepo::new();
    let elsewhere = TempDir::new().unwrap();

    let ws = Workspace::discover(repo.root()).unwrap();
    let result = Prefix::compute(ws.root(), elsewhere.path());
    assert!(matches!(result, Err(Error::OutsideRepository { .. })));
}

#[test]
fn test_discover_rejects_bare_repository() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init_bare(dir.path()).unwrap();

    let result = Workspace::discover(dir.path());
    assert!(matches!(result, Err(Error::BareRepository { .. })));
}

#[test]
fn test_discover_reports_not_found_distinctly() {
    let dir = TempDir::new().unwrap();

    let result = Workspace::discover(dir.path());
    assert!(matches!(result, Err(Error::RepositoryNotFound { .. })));
}
