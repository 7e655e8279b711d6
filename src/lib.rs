//! qtac - regenerate Python modules from Qt Designer and resource files
//!
//! qtac maps `.ui` and `.qrc` sources to generated Python modules through
//! configured `[source-glob, destination-template]` rules and runs `pyuic5` or
//! `pyrcc5` only for destinations that are missing or older than their inputs.
//! A `.qrc` destination is also stale when any file listed in the resource
//! descriptor is newer than it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{is_stale, BuildEvent, BuildOrchestrator, BuildReport};
pub use config::{Config, MissingDependency};
pub use domain::entities::{CompilationOutcome, FailureDetail, ResolvedTarget, TargetOutcome};
pub use domain::ports::{CompileOutput, CompileRequest, Compiler};
pub use domain::value_objects::{FileKind, MappingRule, VariableSet};
pub use error::{QtacError, QtacResult};
pub use infrastructure::ProcessCompiler;
