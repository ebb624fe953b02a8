//! Error types for fixcase-fs

use std::path::PathBuf;

/// Result type for fixcase-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fixcase-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to rename over existing entry {path}")]
    DestinationExists { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
