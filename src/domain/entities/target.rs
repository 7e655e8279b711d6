//! ResolvedTarget entity - one concrete source/destination pair

use std::path::{Path, PathBuf};

use crate::domain::value_objects::FileKind;

/// A source file matched by a rule together with its computed destination.
///
/// Both paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    source: PathBuf,
    destination: PathBuf,
    kind: FileKind,
}

impl ResolvedTarget {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Directory the destination is written into
    pub fn destination_dir(&self) -> Option<&Path> {
        self.destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
