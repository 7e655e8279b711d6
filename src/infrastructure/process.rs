//! Process Compiler
//!
//! Runs `pyuic5`/`pyrcc5` (or any compatible command) as a child process:
//!
//! ```text
//! <program> <options...> -o <destination> <source>
//! ```
//!
//! Blocks until the child exits. There is no timeout.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{CompileOutput, CompileRequest, Compiler};
use crate::infrastructure::shell;

/// Compiler that spawns the configured executable
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCompiler;

impl ProcessCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Full argument vector for `request`, program first
    pub fn argv(request: &CompileRequest<'_>) -> io::Result<Vec<String>> {
        let options = shell::split(request.options)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut argv = Vec::with_capacity(options.len() + 4);
        argv.push(request.program.to_string());
        argv.extend(options);
        argv.push("-o".to_string());
        argv.push(request.destination.to_string_lossy().into_owned());
        argv.push(request.source.to_string_lossy().into_owned());
        Ok(argv)
    }
}

impl Compiler for ProcessCompiler {
    fn compile(&self, request: &CompileRequest<'_>) -> io::Result<CompileOutput> {
        let argv = Self::argv(request)?;
        tracing::debug!(command = %shell::join(&argv), "spawning compiler");

        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(CompileOutput {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn describe(&self, request: &CompileRequest<'_>) -> String {
        match Self::argv(request) {
            Ok(argv) => shell::join(argv),
            Err(_) => format!("{} {}", request.program, request.options),
        }
    }
}
