//! Infrastructure Layer
//!
//! Process, filesystem and glob access.
//!
//! ## Structure
//!
//! - `fs` - Directory and marker file helpers, timestamps, path normalization
//! - `glob` - Source pattern expansion
//! - `process` - `Compiler` implementation that spawns executables
//! - `shell` - Option string splitting and command line quoting

pub mod fs;
pub mod glob;
pub mod process;
pub mod shell;

pub use process::ProcessCompiler;
