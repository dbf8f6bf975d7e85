// ============================================================================
// domain/error.rs - PLAN VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised while building or validating a [`ScaffoldPlan`](super::ScaffoldPlan),
/// before anything touches the filesystem.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Scaffold plan '{name}' has no entries")]
    EmptyPlan { name: String },

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPlan { name } => vec![
                format!("The built-in plan '{}' is empty", name),
                "This is a bug, please report it".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' is declared more than once", path),
                "Each directory and file may appear only once in a plan".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the working directory", path),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyPlan { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
