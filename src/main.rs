//! qtac CLI - regenerate Python modules from Qt .ui and .qrc files
//!
//! Usage: qtac [OPTIONS] [SOURCE DEST]...
//!
//! Rules come from `--config` (JSON, YAML or TOML) and/or positional
//! `SOURCE DEST` pairs. Only stale destinations are recompiled.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use qtac::config::{self, Config, ConfigWarning};
use qtac::presentation::Cli;
use qtac::{BuildOrchestrator, BuildReport, ProcessCompiler};

mod ui;

use ui::context::UiContext;
use ui::json::{self as json_out, JsonEvent};
use ui::render;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    match run(&cli, &ui) {
        Ok(report) => {
            if cli.strict && report.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            if ui.json {
                let _ = json_out::emit(&JsonEvent::error(&err));
            } else {
                eprintln!("{}", render::error(&ui, &err));
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_env("QTAC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("qtac={}", cli.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match &cli.config {
        Some(path) => config::load_with_warnings(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => (Config::default(), Vec::new()),
    };
    let config = config::with_env_overrides(config);

    let config = match cli.apply(config) {
        Ok(config) => config,
        Err(message) => Cli::command()
            .error(ErrorKind::WrongNumberOfValues, message)
            .exit(),
    };
    Ok((config, warnings))
}

fn run(cli: &Cli, ui: &UiContext) -> Result<BuildReport> {
    let (config, warnings) = load_config(cli)?;
    for warning in &warnings {
        if ui.json {
            json_out::emit(&JsonEvent::warning(warning))?;
        } else {
            eprintln!("{}", render::config_warning(ui, warning));
        }
    }

    if config.io_paths.is_empty() {
        tracing::warn!("no ioPaths configured, nothing to do");
    }
    if let Some(path) = &cli.config {
        tracing::info!(config = %path.display(), rules = config.io_paths.len(), "loaded configuration");
    }

    let orchestrator = BuildOrchestrator::new(&config, ProcessCompiler::new())?;
    tracing::debug!(cwd = %orchestrator.cwd().display(), "starting build");

    if ui.json {
        json_out::emit(&JsonEvent::start(config.io_paths.len()))?;
    }

    let mut write_error = None;
    let report = orchestrator.run_with_events(|event| {
        let result = if ui.json {
            json_out::emit(&JsonEvent::from_build(&event))
        } else {
            match render::event(ui, &event) {
                Some(text) => print_line(&text),
                None => Ok(()),
            }
        };
        if let Err(e) = result {
            write_error.get_or_insert(e);
        }
    })?;
    if let Some(e) = write_error {
        return Err(e).context("writing build output");
    }

    if ui.json {
        let success = !(cli.strict && report.has_failures());
        json_out::emit(&JsonEvent::complete(&report, success))?;
    } else if !report.is_empty() {
        print_line(&render::summary(ui, &report))?;
    }

    Ok(report)
}

fn print_line(text: &str) -> std::io::Result<()> {
    use std::io::Write;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")
}
