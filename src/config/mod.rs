//! Configuration module for qtac
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (QTAC_*)
//! 3. Config file given with `--config` (JSON, YAML or TOML)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_with_warnings, parse_str, with_env_overrides, ConfigFormat, ConfigWarning};
pub use types::{Config, MissingDependency};
