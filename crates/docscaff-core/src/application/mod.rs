//! Application layer for docscaff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! What gets written lives in `crate::domain`; this layer only decides the
//! order of operations and which failures stop the run.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FailedWrite, ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
