//! Build report and progress events

use serde::Serialize;

use crate::domain::entities::{CompilationOutcome, TargetOutcome};
use crate::domain::value_objects::MappingRule;

/// Progress callback event emitted while a build runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEvent<'a> {
    /// A rule is about to be expanded
    RuleStarted {
        index: usize,
        rule: &'a MappingRule,
        /// Source pattern after variable substitution
        pattern: &'a str,
    },
    /// A rule's pattern matched nothing
    NoItemsFound { index: usize, pattern: &'a str },
    /// A matched source was processed
    Target(&'a TargetOutcome),
}

/// Everything that happened during one run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub outcomes: Vec<TargetOutcome>,
    /// Substituted patterns of rules that matched no files
    pub empty_patterns: Vec<String>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn count(&self, pred: impl Fn(&CompilationOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }

    pub fn compiled(&self) -> usize {
        self.count(|o| matches!(o, CompilationOutcome::CompiledSuccess))
    }

    pub fn failed(&self) -> usize {
        self.count(CompilationOutcome::is_failure)
    }

    pub fn up_to_date(&self) -> usize {
        self.count(|o| matches!(o, CompilationOutcome::SkippedUpToDate))
    }

    /// Targets skipped because the source vanished or has an unknown extension
    pub fn skipped(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                CompilationOutcome::SkippedNotFound | CompilationOutcome::SkippedUnknownKind
            )
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
