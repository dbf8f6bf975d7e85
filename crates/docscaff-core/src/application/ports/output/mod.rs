//! Driven (output) ports - implemented by infrastructure.
//!
//! The `docscaff-adapters` crate provides implementations.

use crate::error::ScaffoldResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `docscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `docscaff_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths handed to the port are already resolved against the scaffold root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. An existing directory is
    /// not an error.
    ///
    /// Failures are reported as `ApplicationError::DirectoryCreation`.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Create or truncate `path` and write `content` verbatim.
    ///
    /// Failures are reported as `ApplicationError::FileWrite`.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}
