//! Local filesystem adapter using std::fs.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use docscaff_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| directory_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        // File::create truncates; the handle is dropped before returning.
        let mut file = File::create(path).map_err(|e| write_error(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| write_error(path, e))?;
        trace!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

fn directory_error(path: &Path, e: io::Error) -> ScaffoldError {
    ApplicationError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

fn write_error(path: &Path, e: io::Error) -> ScaffoldError {
    ApplicationError::FileWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
