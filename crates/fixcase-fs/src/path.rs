//! Normalized path handling for index/filesystem comparisons

use std::path::{Path, PathBuf};

/// A repository-relative path normalized to forward slashes.
///
/// The git index records paths with `/` separators on every platform;
/// keeping the same representation internally makes index entries and
/// resolved filesystem paths directly comparable as strings. Conversion to
/// platform-native format happens only at I/O boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// The empty path, used as the seed for component-wise accumulation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate the non-empty `/`-separated components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|c| !c.is_empty())
    }

    /// Number of components.
    ///
    /// A partial resolution has a smaller depth than the path it was
    /// resolved from; that difference is what marks a missing target.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// Append one component, inserting a separator unless currently empty.
    pub fn push(&mut self, component: &str) {
        if !self.inner.is_empty() {
            self.inner.push('/');
        }
        self.inner.push_str(component);
    }

    /// Join this path with a component.
    pub fn join(&self, component: &str) -> Self {
        let mut joined = self.clone();
        joined.push(component);
        joined
    }

    /// Get the parent directory, if any.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            _ => None,
        }
    }

    /// Get the final component.
    pub fn file_name(&self) -> Option<&str> {
        self.components().last()
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Convert to a platform-native absolute path under `base`.
    pub fn to_native_under(&self, base: &Path) -> PathBuf {
        let mut out = base.to_path_buf();
        for component in self.components() {
            out.push(component);
        }
        out
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
