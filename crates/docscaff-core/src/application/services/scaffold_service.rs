//! Scaffold Service - main application orchestrator.
//!
//! Materializes a [`ScaffoldPlan`] under a root directory:
//! 1. Validate the plan
//! 2. Ensure every directory (the first failure aborts the run)
//! 3. Write every file (failures are recorded and the run continues)
//!
//! Directory failures return `Err`; file failures land in the report.
//! Callers decide the exit status.

use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{ScaffoldPlan, normalize_content},
    error::{ScaffoldError, ScaffoldResult},
};

/// A file the run could not write.
#[derive(Debug, Clone)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub error: ScaffoldError,
}

/// Outcome of a scaffold run that got past directory creation.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub failed: Vec<FailedWrite>,
}

impl ScaffoldReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            directories: Vec::new(),
            written: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// `true` when every planned file was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use docscaff_core::application::ScaffoldService;
    /// # fn demo(filesystem: Box<dyn docscaff_core::application::Filesystem>) {
    /// let service = ScaffoldService::new(filesystem);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize `plan` under `root`.
    ///
    /// Returns `Err` for an invalid plan or when a directory cannot be
    /// created; in the latter case no file has been written. File failures
    /// never produce `Err`, they are listed in [`ScaffoldReport::failed`].
    #[instrument(
        level = "debug",
        skip_all,
        fields(plan = %plan.name(), root = %root.display())
    )]
    pub fn scaffold(&self, plan: &ScaffoldPlan, root: &Path) -> ScaffoldResult<ScaffoldReport> {
        info!("Starting scaffold in: {}", root.display());

        plan.validate()?;

        let mut report = ScaffoldReport::new(root);

        for dir in plan.directories() {
            let path = dir.path.resolve(root);
            self.ensure_directory(&path)?;
            report.directories.push(path);
        }

        for file in plan.files() {
            let path = file.path.resolve(root);
            match self.write_file(&path, file.content) {
                Ok(()) => report.written.push(path),
                Err(error) => report.failed.push(FailedWrite { path, error }),
            }
        }

        if report.is_complete() {
            info!("Scaffolding completed successfully.");
        } else {
            warn!(
                failed = report.failed.len(),
                written = report.written.len(),
                "Scaffolding completed with skipped files."
            );
        }

        Ok(report)
    }

    /// Create `path` and any missing parents. Existing directories are fine.
    pub fn ensure_directory(&self, path: &Path) -> ScaffoldResult<()> {
        match self.filesystem.create_dir_all(path) {
            Ok(()) => {
                info!("Directory ensured: {}", path.display());
                Ok(())
            }
            Err(e) => {
                error!("{}", e.detail());
                Err(e)
            }
        }
    }

    /// Overwrite `path` with `content`, trimmed and newline-terminated.
    pub fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        match self.filesystem.write_file(path, &normalize_content(content)) {
            Ok(()) => {
                info!("File created: {}", path.display());
                Ok(())
            }
            Err(e) => {
                error!("{}", e.detail());
                Err(e)
            }
        }
    }
}
