//! Core domain layer for docscaff.
//!
//! Pure data: the scaffold plan and the static content it carries. All I/O
//! goes through the `Filesystem` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable content**: Templates are `&'static str`, never rendered

pub mod entities;
pub mod error;
pub mod templates;

pub use entities::{
    common::RelativePath,
    scaffold_plan::{DirectoryToCreate, FileToWrite, PlanEntry, ScaffoldPlan, normalize_content},
};

pub use error::{DomainError, ErrorCategory};
