//! Domain Ports
//!
//! Interfaces the domain needs from the outside world.

mod compiler;

pub use compiler::{CompileOutput, CompileRequest, Compiler};
