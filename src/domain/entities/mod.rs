//! Domain Entities
//!
//! Things with identity for the duration of a run: resolved targets and
//! their outcomes.

mod outcome;
mod target;

pub use outcome::{CompilationOutcome, FailureDetail, TargetOutcome};
pub use target::ResolvedTarget;
