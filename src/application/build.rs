//! Build use case
//!
//! Walks the mapping rules in order, resolves each matched source to a
//! destination and compiles the ones that are stale:
//!
//! 1. Substitute user variables into the source pattern and expand it
//! 2. Per match: derive `FILENAME`/`EXT`/`DIRNAME`, compute the destination
//! 3. Classify by extension, create the destination directory (and marker)
//! 4. Compile if stale
//!
//! A failing compiler never stops the run. Configuration problems are
//! reported by [`BuildOrchestrator::new`] before anything touches the disk.

use std::path::{Path, PathBuf};

use crate::application::report::{BuildEvent, BuildReport};
use crate::application::staleness::is_stale_with_policy;
use crate::config::Config;
use crate::domain::entities::{CompilationOutcome, FailureDetail, ResolvedTarget, TargetOutcome};
use crate::domain::ports::{CompileRequest, Compiler};
use crate::domain::value_objects::{FileKind, MappingRule, VariableSet};
use crate::error::QtacResult;
use crate::infrastructure::fs::{absolutize, ensure_dir, ensure_marker, PACKAGE_MARKER};
use crate::infrastructure::glob;

/// Runs the configured rules against one working directory.
pub struct BuildOrchestrator<'a, C: Compiler> {
    config: &'a Config,
    compiler: C,
    variables: VariableSet,
    cwd: PathBuf,
}

impl<'a, C: Compiler> BuildOrchestrator<'a, C> {
    /// Validate `config` and bind it to the current working directory.
    pub fn new(config: &'a Config, compiler: C) -> QtacResult<Self> {
        let variables = config.validate()?;
        let cwd = std::env::current_dir()?;
        Ok(Self {
            config,
            compiler,
            variables,
            cwd,
        })
    }

    /// Resolve patterns and relative destinations against `cwd` instead.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run every rule and collect the outcomes.
    pub fn run(&self) -> QtacResult<BuildReport> {
        self.run_with_events(|_| {})
    }

    /// Run every rule, reporting progress as it happens.
    ///
    /// Returns `Err` only for errors that abort the whole run (invalid
    /// patterns, unreadable descriptor references, I/O failures while
    /// preparing destinations).
    pub fn run_with_events<F>(&self, mut on_event: F) -> QtacResult<BuildReport>
    where
        F: FnMut(BuildEvent<'_>),
    {
        let mut report = BuildReport::new();

        for (index, rule) in self.config.io_paths.iter().enumerate() {
            let pattern = self.variables.substitute(&rule.source_pattern);
            let _span = tracing::debug_span!("rule", index, pattern = %pattern).entered();
            on_event(BuildEvent::RuleStarted {
                index,
                rule,
                pattern: &pattern,
            });

            let sources = glob::expand(&pattern, &self.cwd)?;
            if sources.is_empty() {
                tracing::debug!("no sources matched");
                on_event(BuildEvent::NoItemsFound {
                    index,
                    pattern: &pattern,
                });
                report.empty_patterns.push(pattern);
                continue;
            }

            for source in sources {
                let outcome = self.process(index, rule, &source)?;
                on_event(BuildEvent::Target(&outcome));
                report.outcomes.push(outcome);
            }
        }

        Ok(report)
    }

    /// Resolve a matched source into a target. `None` for unknown extensions.
    pub fn resolve(&self, rule: &MappingRule, source: &Path) -> Option<ResolvedTarget> {
        let kind = FileKind::from_path(source)?;
        let destination = self
            .variables
            .for_source(source)
            .substitute(&rule.destination_template);
        Some(ResolvedTarget::new(
            absolutize(&self.cwd, source),
            absolutize(&self.cwd, Path::new(&destination)),
            kind,
        ))
    }

    fn process(&self, index: usize, rule: &MappingRule, source: &Path) -> QtacResult<TargetOutcome> {
        if !self.cwd.join(source).exists() {
            tracing::debug!(source = %source.display(), "source vanished");
            return Ok(TargetOutcome::new(
                index,
                source,
                CompilationOutcome::SkippedNotFound,
            ));
        }

        let Some(target) = self.resolve(rule, source) else {
            tracing::debug!(source = %source.display(), "unknown extension");
            return Ok(TargetOutcome::new(
                index,
                source,
                CompilationOutcome::SkippedUnknownKind,
            ));
        };

        if let Some(dir) = target.destination_dir() {
            ensure_dir(dir)?;
            if self.config.init_package {
                ensure_marker(dir, PACKAGE_MARKER)?;
            }
        }

        let outcome = TargetOutcome::new(index, source, CompilationOutcome::SkippedUpToDate)
            .with_destination(target.destination(), target.kind());

        let stale = is_stale_with_policy(
            target.source(),
            target.destination(),
            target.kind(),
            self.config.force,
            self.config.missing_dependency,
        )?;
        if !stale {
            tracing::debug!(source = %source.display(), "up to date");
            return Ok(outcome);
        }

        let (program, options) = match target.kind() {
            FileKind::Plain => (&self.config.uic, &self.config.uic_options),
            FileKind::Descriptor => (&self.config.rcc, &self.config.rcc_options),
        };
        let request = CompileRequest {
            program,
            options,
            source: target.source(),
            destination: target.destination(),
        };
        let command = self.compiler.describe(&request);

        let result = match self.compiler.compile(&request) {
            Ok(output) if output.is_success() => CompilationOutcome::CompiledSuccess,
            Ok(output) if !output.stderr.trim().is_empty() => CompilationOutcome::CompiledFailure {
                detail: FailureDetail::Diagnostics {
                    stderr: output.stderr,
                    code: output.code,
                },
            },
            Ok(output) => CompilationOutcome::CompiledFailure {
                detail: FailureDetail::ExitStatus { code: output.code },
            },
            Err(e) => CompilationOutcome::CompiledFailure {
                detail: FailureDetail::Spawn {
                    message: e.to_string(),
                },
            },
        };
        tracing::debug!(command = %command, failed = result.is_failure(), "compiled");

        Ok(TargetOutcome {
            outcome: result,
            ..outcome.with_command(command)
        })
    }
}
