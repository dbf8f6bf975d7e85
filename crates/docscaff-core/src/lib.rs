//! docscaff Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the documentation scaffold, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          docscaff-cli (binary)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   docscaff-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The core never installs a tracing subscriber; it only emits events.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docscaff_core::prelude::*;
//! # fn demo(filesystem: Box<dyn Filesystem>) -> ScaffoldResult<()> {
//! let plan = docs_project()?;
//! let service = ScaffoldService::new(filesystem);
//! let report = service.scaffold(&plan, std::path::Path::new("."))?;
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, FailedWrite, ScaffoldReport, ScaffoldService, ports::Filesystem,
    };
    pub use crate::domain::{
        DomainError, FileToWrite, RelativePath, ScaffoldPlan, templates::docs_project,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
