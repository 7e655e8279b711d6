//! Error types for qtac
//!
//! Uses `thiserror` for library errors. Per-target problems (missing source,
//! unknown extension, compiler failure) are outcomes, not errors; everything
//! here aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for qtac operations
pub type QtacResult<T> = Result<T, QtacError>;

/// Main error type for qtac operations
#[derive(Error, Debug)]
pub enum QtacError {
    /// A user variable shadows one of the per-file derived variables
    #[error("variable '{name}' is reserved and cannot be defined in the configuration")]
    ReservedVariable { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration value is malformed
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Source glob could not be compiled
    #[error("invalid source pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A file referenced from a resource descriptor could not be inspected
    #[error("cannot read '{reference}' referenced from {descriptor}: {source}")]
    DependencyScan {
        descriptor: PathBuf,
        reference: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QtacError {
    /// Whether the error stems from the configuration rather than the filesystem.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            QtacError::ReservedVariable { .. }
                | QtacError::InvalidConfig { .. }
                | QtacError::InvalidValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_reserved_variable() {
        let err = QtacError::ReservedVariable {
            name: "FILENAME".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "variable 'FILENAME' is reserved and cannot be defined in the configuration"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_error_display_dependency_scan() {
        let err = QtacError::DependencyScan {
            descriptor: PathBuf::from("resources/app.qrc"),
            reference: PathBuf::from("resources/icon.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "cannot read 'resources/icon.png' referenced from resources/app.qrc: not found"
        );
        assert!(!err.is_configuration());
    }
}
