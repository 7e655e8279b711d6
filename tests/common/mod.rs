//! Common test utilities for qtac CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory, a fake compiler script
//! that records its invocations, and helpers to run the qtac binary.

#![allow(dead_code)]

use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Base timestamp for fixtures
pub const BASE: u64 = 1_700_000_000;

/// Writes `-o DEST` with a header naming the source. Sources with "broken" in
/// their name fail with a diagnostic on stderr.
const FAKE_COMPILER: &str = r##"#!/bin/sh
printf '%s\n' "$*" >> "$0.log"
out=""
while [ $# -gt 1 ]; do
    case "$1" in
        -o) out="$2"; shift 2 ;;
        *) shift ;;
    esac
done
case "$1" in
    *broken*) echo "parse error in $1" >&2; exit 1 ;;
esac
echo "# generated from $1" > "$out"
"##;

/// Result of running a qtac CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Isolated project directory with a fake compiler
pub struct TestEnv {
    pub project_root: TempDir,
    compiler: PathBuf,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = tempfile::tempdir().unwrap();
        let compiler = project_root.path().join(".bin/fakec");
        fs::create_dir_all(compiler.parent().unwrap()).unwrap();
        fs::write(&compiler, FAKE_COMPILER).unwrap();
        fs::set_permissions(&compiler, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            project_root,
            compiler,
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path of the fake compiler, for `--uic`/`--rcc` or config files
    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    /// Write `relative` with the given modification time offset from `BASE`
    pub fn write(&self, relative: &str, content: &str, offset: u64) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        set_mtime(&path, offset);
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Argument lists the fake compiler was called with
    pub fn compiler_calls(&self) -> Vec<String> {
        let mut log = self.compiler.clone().into_os_string();
        log.push(".log");
        fs::read_to_string(log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run qtac in the project directory with `--uic`/`--rcc` pointing at the
    /// fake compiler.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let compiler = self.compiler.to_string_lossy().into_owned();
        let mut full: Vec<&str> = vec!["--uic", &compiler, "--rcc", &compiler];
        full.extend_from_slice(args);
        self.run_raw(&full)
    }

    /// Run qtac with exactly `args`
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_qtac"));
        cmd.args(args)
            .current_dir(self.project_root.path())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("QTAC_LOG");
        for key in [
            "QTAC_FORCE",
            "QTAC_UIC",
            "QTAC_RCC",
            "QTAC_UIC_OPTIONS",
            "QTAC_RCC_OPTIONS",
            "QTAC_INIT_PACKAGE",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub fn set_mtime(path: &Path, offset: u64) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(BASE + offset))
        .unwrap();
}
