//! Application layer errors.
//!
//! These errors represent failures while materializing a plan, not problems
//! with the plan itself. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while writing a scaffold to a filesystem.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A directory (or one of its parents) could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// A file could not be opened, truncated, or written.
    #[error("Failed to write file {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// Adapter state lock was poisoned.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreation { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions in the working directory".into(),
                "Make sure no regular file already uses that name".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that the file is not read-only or a directory".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreation { .. } | Self::FileWrite { .. } => ErrorCategory::Filesystem,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
