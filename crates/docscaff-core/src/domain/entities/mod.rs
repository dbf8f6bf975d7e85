pub mod common;
pub mod scaffold_plan;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use scaffold_plan::ScaffoldPlan;
