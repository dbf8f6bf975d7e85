//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside world.
//! Adapters in `docscaff-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
