//! Git repository fixtures for casing tests.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary git repository whose index entries and working-tree files
/// can carry different casings.
///
/// Entries are staged with [`git2::Index::add_frombuffer`], which records a
/// path without consulting the working tree, so a fixture can track
/// `Src/Main.java` while the disk holds `src/main.java` regardless of the
/// host filesystem's case semantics.
pub struct CaseRepo {
    temp_dir: TempDir,
    repo: git2::Repository,
}

impl CaseRepo {
    /// Initialise a fresh repository in a temporary directory.
    ///
    /// # Panics
    /// Panics if the filesystem or git operations fail.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("CaseRepo: failed to create temp dir");
        let repo = git2::Repository::init(temp_dir.path())
            .expect("CaseRepo: failed to init git repository");
        Self { temp_dir, repo }
    }

    /// Working-tree root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The underlying git2 repository.
    pub fn repo(&self) -> &git2::Repository {
        &self.repo
    }

    /// Write a file at `rel` (creating parents), without staging it.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("CaseRepo: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("CaseRepo: failed to write {}: {e}", path.display()));
    }

    /// Record `logical` in the index with the given blob content, without
    /// touching the working tree.
    pub fn stage_entry(&self, logical: &str, content: &str) {
        let mut index = self.repo.index().expect("CaseRepo: failed to open index");
        let entry = git2::IndexEntry {
            ctime: git2::IndexTime::new(0, 0),
            mtime: git2::IndexTime::new(0, 0),
            dev: 0,
            ino: 0,
            mode: 0o100644,
            uid: 0,
            gid: 0,
            file_size: content.len() as u32,
            id: git2::Oid::zero(),
            flags: 0,
            flags_extended: 0,
            path: logical.as_bytes().to_vec(),
        };
        index
            .add_frombuffer(&entry, content.as_bytes())
            .unwrap_or_else(|e| panic!("CaseRepo: failed to stage {logical}: {e}"));
        index.write().expect("CaseRepo: failed to write index");
    }

    /// Write a file on disk at `on_disk` and track it in the index as
    /// `logical`, the standard mismatch fixture.
    pub fn tracked_with_casing(&self, logical: &str, on_disk: &str, content: &str) {
        self.write_file(on_disk, content);
        self.stage_entry(logical, content);
    }

    /// Tracked logical paths currently recorded in the index.
    ///
    /// Forces a re-read from disk so writes made through another repository
    /// handle are observed.
    pub fn index_paths(&self) -> Vec<String> {
        let mut index = self.repo.index().expect("CaseRepo: failed to open index");
        index.read(true).expect("CaseRepo: failed to re-read index");
        index
            .iter()
            .map(|e| String::from_utf8_lossy(&e.path).into_owned())
            .collect()
    }

    /// Commit the current index onto HEAD, for scenarios that need history.
    pub fn commit(&self, message: &str) {
        let sig = git2::Signature::now("Test", "test@example.com")
            .expect("CaseRepo: failed to create signature");
        let mut index = self.repo.index().expect("CaseRepo: failed to open index");
        let tree_id = index.write_tree().expect("CaseRepo: failed to write tree");
        let tree = self
            .repo
            .find_tree(tree_id)
            .expect("CaseRepo: failed to find tree");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("CaseRepo: failed to commit");
    }
}

impl Default for CaseRepo {
    fn default() -> Self {
        Self::new()
    }
}
