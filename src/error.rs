use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for version-stamp operations
#[derive(Error, Debug)]
pub enum StampError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to lock {}: {}", path.display(), source)]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience type alias for Results in version-stamp
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => StampError::NotFound { path },
            io::ErrorKind::PermissionDenied => StampError::PermissionDenied { path },
            _ => StampError::Io { path, source: err },
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StampError::Config(msg.into())
    }

    /// Create a validation error with context
    pub fn validation(msg: impl Into<String>) -> Self {
        StampError::Validation(msg.into())
    }

    pub fn lock(path: impl AsRef<Path>, source: io::Error) -> Self {
        StampError::Lock {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
