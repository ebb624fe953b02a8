//! Repository discovery and index access

use std::path::{Path, PathBuf};

use fixcase_fs::NormalizedPath;
use git2::Repository;

use crate::{Error, Result};

/// A discovered git repository together with its working-tree root.
///
/// The root is canonicalized once at discovery and anchors all path
/// resolution for the run; neither is re-read mid-run.
pub struct Workspace {
    repo: Repository,
    root: PathBuf,
}

impl Workspace {
    /// Discover the repository containing `start`, walking upward.
    ///
    /// Returns [`Error::RepositoryNotFound`] when no repository exists
    /// between `start` and the filesystem root. That is a distinct status, so
    /// callers can tell "nothing to do" apart from "no mismatches".
    /// Bare repositories are rejected: there is no working tree whose
    /// casing could disagree with the index.
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::RepositoryNotFound {
                    start: start.to_path_buf(),
                }
            } else {
                Error::Git(e)
            }
        })?;

        let Some(workdir) = repo.workdir() else {
            return Err(Error::BareRepository {
                git_dir: repo.path().to_path_buf(),
            });
        };
        let root =
            dunce::canonicalize(workdir).map_err(|e| fixcase_fs::Error::io(workdir, e))?;

        tracing::debug!(root = %root.display(), "discovered repository");
        Ok(Self { repo, root })
    }

    /// The canonicalized working-tree root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Access the underlying git2 repository.
    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// All tracked logical paths, in index order.
    ///
    /// Index paths are `/`-separated byte strings. An entry that is not
    /// valid UTF-8 can never equal a directory-listing name and is skipped
    /// with a warning.
    pub fn tracked_paths(&self) -> Result<Vec<NormalizedPath>> {
        let index = self.repo.index()?;
        let mut paths = Vec::with_capacity(index.len());

        for entry in index.iter() {
            match std::str::from_utf8(&entry.path) {
                Ok(path) => paths.push(NormalizedPath::new(path)),
                Err(_) => {
                    tracing::warn!(
                        path = %String::from_utf8_lossy(&entry.path),
                        "skipping non-UTF-8 index path"
                    );
                }
            }
        }

        Ok(paths)
    }
}
