//! Presentation Layer
//!
//! CLI argument parsing (via clap) and the mapping from parsed flags onto the
//! configuration record.

pub mod cli;

pub use cli::{Cli, ColorWhen};
