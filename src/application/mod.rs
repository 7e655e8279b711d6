//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//!
//! - `build` - `BuildOrchestrator`: rules → targets → outcomes
//! - `staleness` - Timestamp comparison with one level of descriptor references
//! - `report` - `BuildReport` and `BuildEvent`

pub mod build;
mod report;
pub mod staleness;

pub use build::BuildOrchestrator;
pub use report::{BuildEvent, BuildReport};
pub use staleness::{is_stale, is_stale_with_policy};
