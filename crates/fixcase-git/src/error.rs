//! Error types for fixcase-git

use std::path::PathBuf;

/// Result type for fixcase-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fixcase-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] fixcase_fs::Error),

    #[error("No git repository found starting from {start}")]
    RepositoryNotFound { start: PathBuf },

    #[error("Repository at {git_dir} is bare; there is no working tree to compare against")]
    BareRepository { git_dir: PathBuf },

    #[error("Working directory {cwd} is outside the repository root {root}")]
    OutsideRepository { cwd: PathBuf, root: PathBuf },
}
