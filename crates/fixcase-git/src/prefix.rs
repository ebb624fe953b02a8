//! Scope computation for subdirectory invocations

use std::path::Path;

use fixcase_fs::NormalizedPath;

use crate::{Error, Result};

/// The index-relative prefix selecting which entries are in scope when the
/// tool runs from a subdirectory of the repository root.
///
/// Computed once per run and applied uniformly to every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    inner: NormalizedPath,
}

impl Prefix {
    /// Compute the prefix for `cwd` relative to the canonicalized `root`.
    ///
    /// Empty when `cwd` is the root itself. A working directory outside
    /// the root yields [`Error::OutsideRepository`]; callers must treat
    /// that as "no entries in scope" rather than guessing a prefix.
    pub fn compute(root: &Path, cwd: &Path) -> Result<Self> {
        let cwd = dunce::canonicalize(cwd).map_err(|e| fixcase_fs::Error::io(cwd, e))?;
        let relative = cwd.strip_prefix(root).map_err(|_| Error::OutsideRepository {
            cwd: cwd.clone(),
            root: root.to_path_buf(),
        })?;

        Ok(Self {
            inner: NormalizedPath::new(relative),
        })
    }

    /// The empty prefix: every entry is in scope.
    pub fn repository_root() -> Self {
        Self {
            inner: NormalizedPath::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Whether `logical` falls under this prefix.
    ///
    /// Matching is component-boundary aware: prefix `sub` covers `sub/x`
    /// but not `subdir/x`.
    pub fn contains(&self, logical: &NormalizedPath) -> bool {
        if self.inner.is_empty() {
            return true;
        }
        match logical.as_str().strip_prefix(self.inner.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}
