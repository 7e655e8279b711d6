//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Flags override environment variables, which override the config file
//! - Positional `SOURCE DEST` pairs replace the configured `ioPaths`

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::domain::value_objects::MappingRule;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// qtac - regenerate Python modules from Qt .ui and .qrc files
#[derive(Parser, Debug)]
#[command(name = "qtac")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: qtac 'gui/*.ui' 'generated/%%FILENAME%%_ui.py'")]
pub struct Cli {
    /// Source glob and destination template pairs
    #[arg(value_name = "SOURCE DEST")]
    pub paths: Vec<String>,

    /// JSON, YAML or TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resource compiler command
    #[arg(long, value_name = "CMD")]
    pub rcc: Option<String>,

    /// Additional options for the resource compiler
    #[arg(long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub rcc_options: Option<String>,

    /// UI compiler command
    #[arg(long, value_name = "CMD")]
    pub uic: Option<String>,

    /// Additional options for the UI compiler
    #[arg(long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub uic_options: Option<String>,

    /// Compile every target regardless of timestamps
    #[arg(short, long)]
    pub force: bool,

    /// Do not create __init__.py in destination directories
    #[arg(long)]
    pub no_init_package: bool,

    /// Exit with status 1 if any compilation fails
    #[arg(long)]
    pub strict: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Mapping rules given on the command line.
    ///
    /// `Ok(None)` when no positionals were passed, `Err` for an odd count.
    pub fn io_paths(&self) -> Result<Option<Vec<MappingRule>>, String> {
        if self.paths.is_empty() {
            return Ok(None);
        }
        MappingRule::from_flat_pairs(&self.paths).map(Some).ok_or_else(|| {
            format!(
                "expected SOURCE DEST pairs, got {} path argument(s)",
                self.paths.len()
            )
        })
    }

    /// Overlay command-line flags on `config`.
    pub fn apply(&self, mut config: Config) -> Result<Config, String> {
        if let Some(rules) = self.io_paths()? {
            config.io_paths = rules;
        }
        if let Some(rcc) = &self.rcc {
            config.rcc = rcc.clone();
        }
        if let Some(options) = &self.rcc_options {
            config.rcc_options = options.clone();
        }
        if let Some(uic) = &self.uic {
            config.uic = uic.clone();
        }
        if let Some(options) = &self.uic_options {
            config.uic_options = options.clone();
        }
        if self.force {
            config.force = true;
        }
        if self.no_init_package {
            config.init_package = false;
        }
        Ok(config)
    }

    /// Log filter implied by `-v` when `QTAC_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("qtac").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_positional_pairs() {
        let cli = parse(&["gui/*.ui", "generated/%%FILENAME%%_ui.py"]);
        let rules = cli.io_paths().unwrap().unwrap();
        assert_eq!(
            rules,
            vec![MappingRule::new("gui/*.ui", "generated/%%FILENAME%%_ui.py")]
        );
    }

    #[test]
    fn odd_positionals_are_rejected() {
        let cli = parse(&["gui/*.ui"]);
        assert!(cli.io_paths().is_err());
        assert!(cli.apply(Config::default()).is_err());
    }

    #[test]
    fn no_positionals_keep_configured_rules() {
        let config = Config {
            io_paths: vec![MappingRule::new("a/*.ui", "b/%%FILENAME%%.py")],
            ..Config::default()
        };
        let cli = parse(&["--force"]);
        let config = cli.apply(config).unwrap();
        assert_eq!(config.io_paths.len(), 1);
        assert!(config.force);
    }

    #[test]
    fn options_accept_leading_hyphen() {
        let cli = parse(&["--uic-options", "--from-imports", "--rcc-options=-compress 9"]);
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config.uic_options, "--from-imports");
        assert_eq!(config.rcc_options, "-compress 9");
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            uic: "from-file".to_string(),
            ..Config::default()
        };
        let cli = parse(&["--uic", "pyside6-uic", "--no-init-package"]);
        let config = cli.apply(config).unwrap();
        assert_eq!(config.uic, "pyside6-uic");
        assert!(!config.init_package);
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        assert_eq!(parse(&[]).log_level(), "warn");
        assert_eq!(parse(&["-v"]).log_level(), "info");
        assert_eq!(parse(&["-vvv"]).log_level(), "trace");
    }

    #[test]
    fn color_flag_parses() {
        assert_eq!(parse(&["--color", "never"]).color, Some(ColorWhen::Never));
    }
}
