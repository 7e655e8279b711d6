//! NDJSON output for `--json`.
//!
//! One object per line, each carrying an `event` discriminator.

use std::io::{self, Write};

use serde::Serialize;

use qtac::config::ConfigWarning;
use qtac::{BuildEvent, BuildReport, TargetOutcome};

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JsonEvent<'a> {
    Start {
        version: &'static str,
        rules: usize,
    },
    ConfigWarning {
        key: &'a str,
        file: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggestion: Option<&'a str>,
    },
    Rule {
        index: usize,
        pattern: &'a str,
        destination: &'a str,
    },
    NoItems {
        index: usize,
        pattern: &'a str,
    },
    Target(&'a TargetOutcome),
    Complete {
        success: bool,
        compiled: usize,
        up_to_date: usize,
        failed: usize,
        skipped: usize,
    },
    Error {
        message: String,
    },
}

impl<'a> JsonEvent<'a> {
    pub fn start(rules: usize) -> Self {
        JsonEvent::Start {
            version: env!("CARGO_PKG_VERSION"),
            rules,
        }
    }

    pub fn from_build(event: &BuildEvent<'a>) -> Self {
        match *event {
            BuildEvent::RuleStarted {
                index,
                rule,
                pattern,
            } => JsonEvent::Rule {
                index,
                pattern,
                destination: &rule.destination_template,
            },
            BuildEvent::NoItemsFound { index, pattern } => JsonEvent::NoItems { index, pattern },
            BuildEvent::Target(outcome) => JsonEvent::Target(outcome),
        }
    }

    pub fn warning(warning: &'a ConfigWarning) -> Self {
        JsonEvent::ConfigWarning {
            key: &warning.key,
            file: warning.file.display().to_string(),
            line: warning.line,
            suggestion: warning.suggestion.as_deref(),
        }
    }

    pub fn complete(report: &BuildReport, success: bool) -> Self {
        JsonEvent::Complete {
            success,
            compiled: report.compiled(),
            up_to_date: report.up_to_date(),
            failed: report.failed(),
            skipped: report.skipped(),
        }
    }

    pub fn error(err: &anyhow::Error) -> Self {
        JsonEvent::Error {
            message: format!("{err:#}"),
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &JsonEvent<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(b"\n")
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit(event: &JsonEvent<'_>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}
