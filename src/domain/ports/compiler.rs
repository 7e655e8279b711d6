//! Compiler port - abstraction over the external uic/rcc executables
//!
//! The orchestrator only needs "turn this source into that destination"; how
//! the executable is located and run is an infrastructure concern.

use std::io;
use std::path::Path;

/// A single compiler invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileRequest<'a> {
    /// Command to run (e.g. `pyuic5`)
    pub program: &'a str,
    /// Extra options, split shell-style before use
    pub options: &'a str,
    pub source: &'a Path,
    pub destination: &'a Path,
}

/// What the compiler reported
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
    /// Exit code; `None` if terminated by a signal
    pub code: Option<i32>,
    /// Captured standard error
    pub stderr: String,
}

impl CompileOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external compiler.
///
/// `Err` means the compiler could not be started at all; a compiler that ran
/// and failed is reported through [`CompileOutput`].
pub trait Compiler {
    fn compile(&self, request: &CompileRequest<'_>) -> io::Result<CompileOutput>;

    /// Command line shown to the user for `request`
    fn describe(&self, request: &CompileRequest<'_>) -> String {
        format!(
            "{} {} -o {} {}",
            request.program,
            request.options,
            request.destination.display(),
            request.source.display()
        )
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl<C: Compiler + ?Sized> Compiler for &C {
    fn compile(&self, request: &CompileRequest<'_>) -> io::Result<CompileOutput> {
        (**self).compile(request)
    }

    fn describe(&self, request: &CompileRequest<'_>) -> String {
        (**self).describe(request)
    }
}
