//! Configuration types

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::value_objects::{MappingRule, VariableSet};
use crate::error::{QtacError, QtacResult};
use crate::infrastructure::shell;

/// What to do when a resource descriptor lists a file that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingDependency {
    /// Abort the run (default)
    #[default]
    Error,
    /// Log a warning and recompile the descriptor
    Stale,
}

/// Main configuration record.
///
/// Loaded once, adjusted by environment and CLI overrides, then passed by
/// reference into the build. Never mutated during a run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Resource compiler command
    #[serde(default = "default_rcc")]
    pub rcc: String,

    /// Extra options for the resource compiler
    #[serde(default)]
    pub rcc_options: String,

    /// UI compiler command
    #[serde(default = "default_uic")]
    pub uic: String,

    /// Extra options for the UI compiler
    #[serde(default)]
    pub uic_options: String,

    /// Compile everything regardless of timestamps
    #[serde(default)]
    pub force: bool,

    /// Source pattern / destination template pairs, processed in order
    #[serde(default, rename = "ioPaths", alias = "io_paths")]
    pub io_paths: Vec<MappingRule>,

    /// User placeholders for destination templates
    #[serde(default)]
    pub variables: BTreeMap<String, String>,

    /// Create `__init__.py` next to generated files
    #[serde(default = "default_true")]
    pub init_package: bool,

    #[serde(default)]
    pub missing_dependency: MissingDependency,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rcc: default_rcc(),
            rcc_options: String::new(),
            uic: default_uic(),
            uic_options: String::new(),
            force: false,
            io_paths: Vec::new(),
            variables: BTreeMap::new(),
            init_package: true,
            missing_dependency: MissingDependency::default(),
        }
    }
}

fn default_rcc() -> String {
    "pyrcc5".to_string()
}

fn default_uic() -> String {
    "pyuic5".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Check everything that can be checked before touching the filesystem.
    ///
    /// Returns the user variables on success.
    pub fn validate(&self) -> QtacResult<VariableSet> {
        let variables = VariableSet::from_user(&self.variables)?;

        for (key, options) in [("rcc_options", &self.rcc_options), ("uic_options", &self.uic_options)] {
            shell::split(options).map_err(|e| QtacError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }

        for (key, program) in [("rcc", &self.rcc), ("uic", &self.uic)] {
            if program.trim().is_empty() {
                return Err(QtacError::InvalidValue {
                    key: key.to_string(),
                    message: "command must not be empty".to_string(),
                });
            }
        }

        Ok(variables)
    }
}
