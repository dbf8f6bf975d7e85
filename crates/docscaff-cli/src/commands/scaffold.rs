//! Scaffold the documentation project into a directory.
//!
//! Responsibility: wire the local filesystem adapter into the core service,
//! run the built-in plan, and summarise the report. No business logic lives
//! here.

use std::path::Path;

use tracing::{debug, instrument};

use docscaff_adapters::LocalFilesystem;
use docscaff_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::templates,
    error::ScaffoldError,
};

use crate::{error::CliResult, output::OutputManager};

/// Execute the scaffold in `root`.
///
/// A directory that cannot be created is an error. Files that cannot be
/// written are reported but still end in `Ok`.
#[instrument(level = "debug", skip_all)]
pub fn execute(root: &Path, output: &OutputManager) -> CliResult<()> {
    let plan = templates::docs_project().map_err(ScaffoldError::from)?;
    debug!(
        directories = plan.directory_count(),
        files = plan.file_count(),
        "Plan loaded"
    );

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let report = service.scaffold(&plan, root)?;

    summarize(&report, output)?;
    Ok(())
}

fn summarize(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if report.is_complete() {
        output.success(&format!(
            "Scaffold ready in {}: {} directories, {} files",
            report.root.display(),
            report.directories.len(),
            report.written.len(),
        ))?;
        return Ok(());
    }

    output.warning(&format!(
        "Scaffold incomplete in {}: {} written, {} skipped",
        report.root.display(),
        report.written.len(),
        report.failed.len(),
    ))?;
    for failed in &report.failed {
        output.warning(&format!("  skipped {}", failed.path.display()))?;
    }
    Ok(())
}
