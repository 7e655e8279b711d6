//! Text rendering of build progress.
//!
//! Every function returns the finished line(s) without a trailing newline so
//! that callers decide where output goes.

use crossterm::style::Stylize;

use qtac::config::ConfigWarning;
use qtac::{BuildEvent, BuildReport, CompilationOutcome, TargetOutcome};

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;
use crate::ui::theme;

fn line(ui: &UiContext, icon: Icon, text: &str) -> String {
    format!("{} {}", icon.colored(ui.color, ui.unicode), text)
}

fn dim(ui: &UiContext, text: &str) -> String {
    if ui.color {
        format!("{}", text.with(theme::colors::DIM))
    } else {
        text.to_string()
    }
}

/// Lines for one progress event, `None` if the event is silent.
pub fn event(ui: &UiContext, event: &BuildEvent<'_>) -> Option<String> {
    match event {
        BuildEvent::RuleStarted { index, pattern, .. } => (ui.verbose > 0).then(|| {
            dim(ui, &format!("Rule {}: {}", index + 1, pattern))
        }),
        BuildEvent::NoItemsFound { pattern, .. } => {
            Some(line(ui, Icon::Warning, &format!("No items found in {pattern}")))
        }
        BuildEvent::Target(outcome) => Some(target(ui, outcome)),
    }
}

/// Lines for a processed target
pub fn target(ui: &UiContext, outcome: &TargetOutcome) -> String {
    let command = outcome.command.as_deref().unwrap_or_default();
    match &outcome.outcome {
        CompilationOutcome::CompiledSuccess => line(ui, Icon::Success, command),
        CompilationOutcome::CompiledFailure { detail } => {
            let mut out = line(ui, Icon::Warning, command);
            for detail_line in detail.to_string().lines() {
                out.push('\n');
                out.push_str(&line(ui, Icon::Error, detail_line));
            }
            out
        }
        CompilationOutcome::SkippedUpToDate => line(
            ui,
            Icon::Info,
            &format!("Skipping {}, up to date", outcome.display_name()),
        ),
        CompilationOutcome::SkippedNotFound => line(
            ui,
            Icon::Skip,
            &format!("Skipping target {}, file not found", outcome.source.display()),
        ),
        CompilationOutcome::SkippedUnknownKind => line(
            ui,
            Icon::Warning,
            &format!("Unknown target {} found", outcome.source.display()),
        ),
    }
}

/// Final summary line
pub fn summary(ui: &UiContext, report: &BuildReport) -> String {
    let mut parts = vec![
        format!("{} compiled", report.compiled()),
        format!("{} up to date", report.up_to_date()),
    ];
    if report.failed() > 0 {
        parts.push(format!("{} failed", report.failed()));
    }
    if report.skipped() > 0 {
        parts.push(format!("{} skipped", report.skipped()));
    }

    let icon = if report.has_failures() {
        Icon::Error
    } else {
        Icon::Success
    };
    line(ui, icon, &parts.join(", "))
}

pub fn config_warning(ui: &UiContext, warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(n) => format!("{}:{}", warning.file.display(), n),
        None => warning.file.display().to_string(),
    };
    let mut out = line(
        ui,
        Icon::Warning,
        &format!("Unknown config key '{}' in {}", warning.key, location),
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push('\n');
        out.push_str(&format!(
            "  {} {}",
            Icon::Arrow.colored(ui.color, ui.unicode),
            dim(ui, &format!("Did you mean '{suggestion}'?"))
        ));
    }
    out
}

/// Fatal error, with its cause chain
pub fn error(ui: &UiContext, err: &anyhow::Error) -> String {
    let mut out = line(ui, Icon::Error, &format!("Error: {err}"));
    for cause in err.chain().skip(1) {
        out.push('\n');
        out.push_str(&format!(
            "  {} {}",
            Icon::Arrow.colored(ui.color, ui.unicode),
            dim(ui, &cause.to_string())
        ));
    }
    out
}
