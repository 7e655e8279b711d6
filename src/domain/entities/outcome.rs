//! Compilation outcome entity - what happened to a single target

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::FileKind;

/// Why a compiler invocation failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FailureDetail {
    /// Compiler wrote diagnostics to stderr
    Diagnostics { stderr: String, code: Option<i32> },
    /// Non-zero exit without diagnostics (`None` when killed by a signal)
    ExitStatus { code: Option<i32> },
    /// Compiler could not be started
    Spawn { message: String },
}

impl std::fmt::Display for FailureDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureDetail::Diagnostics { stderr, .. } => write!(f, "{}", stderr.trim_end()),
            FailureDetail::ExitStatus { code: Some(code) } => {
                write!(f, "Command returned with non-zero exit status {}", code)
            }
            FailureDetail::ExitStatus { code: None } => {
                write!(f, "Command was terminated by a signal")
            }
            FailureDetail::Spawn { message } => write!(f, "Failed to run command: {}", message),
        }
    }
}

/// Result of processing one matched source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompilationOutcome {
    /// Destination is newer than all inputs
    SkippedUpToDate,
    /// Glob match vanished before it was processed
    SkippedNotFound,
    /// Extension is neither `.ui` nor `.qrc`
    SkippedUnknownKind,
    /// Compiler exited successfully
    CompiledSuccess,
    /// Compiler failed; the run continues
    CompiledFailure { detail: FailureDetail },
}

impl CompilationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CompilationOutcome::CompiledFailure { .. })
    }
}

/// Outcome of one target with the context needed to report it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOutcome {
    /// Index of the rule that matched the source
    pub rule: usize,
    /// Source path as matched by the glob
    pub source: PathBuf,
    /// Absolute destination, when it was computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FileKind>,
    /// Command line shown to the user, when a compiler ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(flatten)]
    pub outcome: CompilationOutcome,
}

impl TargetOutcome {
    pub fn new(rule: usize, source: impl Into<PathBuf>, outcome: CompilationOutcome) -> Self {
        Self {
            rule,
            source: source.into(),
            destination: None,
            kind: None,
            command: None,
            outcome,
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>, kind: FileKind) -> Self {
        self.destination = Some(destination.into());
        self.kind = Some(kind);
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// File name without extension, as shown in "up to date" lines
    pub fn display_name(&self) -> String {
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_detail_display() {
        let d = FailureDetail::ExitStatus { code: Some(2) };
        assert_eq!(d.to_string(), "Command returned with non-zero exit status 2");

        let d = FailureDetail::Diagnostics {
            stderr: "Error: bad xml\n".to_string(),
            code: Some(1),
        };
        assert_eq!(d.to_string(), "Error: bad xml");
    }

    #[test]
    fn outcome_predicates() {
        assert!(!CompilationOutcome::CompiledSuccess.is_failure());
        assert!(!CompilationOutcome::SkippedUpToDate.is_failure());
        assert!(CompilationOutcome::CompiledFailure {
            detail: FailureDetail::ExitStatus { code: Some(1) }
        }
        .is_failure());
    }

    #[test]
    fn outcome_serializes_flat() {
        let outcome = TargetOutcome::new(0, "gui/main.ui", CompilationOutcome::SkippedUpToDate)
            .with_destination("/p/generated/main_ui.py", FileKind::Plain);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "skipped_up_to_date");
        assert_eq!(json["kind"], "plain");
        assert_eq!(json["source"], "gui/main.ui");
        assert!(json.get("command").is_none());
    }

    #[test]
    fn display_name_strips_extension() {
        let outcome = TargetOutcome::new(0, "gui/main.ui", CompilationOutcome::SkippedUpToDate);
        assert_eq!(outcome.display_name(), "main");
    }
}
