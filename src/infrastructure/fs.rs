//! Local filesystem helpers
//!
//! Everything here is idempotent: running it twice, or from two processes at
//! once, leaves the same result.

use std::fs::OpenOptions;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Name of the marker that makes a directory an importable Python package
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Create `dir` and all of its parents. No-op if it already exists.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}

/// Make sure `dir/name` exists without touching existing content.
///
/// Opens for append and closes without writing, so a populated marker is
/// never truncated.
pub fn ensure_marker(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    OpenOptions::new().create(true).append(true).open(&path)?;
    Ok(path)
}

/// Last modification time of `path`
pub fn modified(path: &Path) -> io::Result<SystemTime> {
    std::fs::metadata(path)?.modified()
}

/// Join `path` onto `base` unless absolute, then drop `.` and fold `..`.
///
/// Purely lexical: symlinks are not resolved and the path need not exist.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if !out.pop() && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
