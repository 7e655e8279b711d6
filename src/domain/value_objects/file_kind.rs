//! File kind value object - how a source file is compiled

use serde::Serialize;
use std::path::Path;

/// Category of a source file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Resource descriptor (`.qrc`) listing other files; compiled with rcc
    Descriptor,
    /// Designer form (`.ui`); compiled with uic
    Plain,
}

impl FileKind {
    /// Classify by extension (without the period). Unknown extensions yield `None`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "qrc" => Some(FileKind::Descriptor),
            "ui" => Some(FileKind::Plain),
            _ => None,
        }
    }

    /// Classify a path by its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether the staleness check has to look inside the file
    pub fn has_dependencies(&self) -> bool {
        matches!(self, FileKind::Descriptor)
    }
}
