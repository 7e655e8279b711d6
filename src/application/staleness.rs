//! Staleness resolution
//!
//! A destination is stale when it is missing, older than its source, or (for
//! resource descriptors) older than any file the descriptor lists. Only one
//! level of references is followed.

use std::path::Path;
use std::time::SystemTime;

use crate::config::MissingDependency;
use crate::domain::services::resolve_references;
use crate::domain::value_objects::FileKind;
use crate::error::{QtacError, QtacResult};
use crate::infrastructure::fs::modified;

/// Decide whether `destination` has to be regenerated from `source`.
///
/// A listed file that cannot be inspected aborts with
/// [`QtacError::DependencyScan`].
pub fn is_stale(source: &Path, destination: &Path, kind: FileKind, force: bool) -> QtacResult<bool> {
    is_stale_with_policy(source, destination, kind, force, MissingDependency::Error)
}

/// [`is_stale`] with a configurable reaction to missing descriptor references.
pub fn is_stale_with_policy(
    source: &Path,
    destination: &Path,
    kind: FileKind,
    force: bool,
    policy: MissingDependency,
) -> QtacResult<bool> {
    if force {
        return Ok(true);
    }

    if !destination.exists() {
        tracing::trace!(destination = %destination.display(), "destination missing");
        return Ok(true);
    }

    let dest_time = modified(destination)?;
    let source_time = modified(source)?;
    if source_time > dest_time {
        tracing::trace!(source = %source.display(), "source newer than destination");
        return Ok(true);
    }

    if kind.has_dependencies() {
        return any_reference_newer(source, dest_time, policy);
    }

    Ok(false)
}

fn any_reference_newer(
    descriptor: &Path,
    dest_time: SystemTime,
    policy: MissingDependency,
) -> QtacResult<bool> {
    let text = std::fs::read_to_string(descriptor)?;

    for reference in resolve_references(descriptor, &text) {
        let ref_time = match modified(&reference) {
            Ok(time) => time,
            Err(source) => match policy {
                MissingDependency::Error => {
                    return Err(QtacError::DependencyScan {
                        descriptor: descriptor.to_path_buf(),
                        reference,
                        source,
                    });
                }
                MissingDependency::Stale => {
                    tracing::warn!(
                        descriptor = %descriptor.display(),
                        reference = %reference.display(),
                        error = %source,
                        "listed file is unreadable, treating descriptor as stale"
                    );
                    return Ok(true);
                }
            },
        };

        if ref_time > dest_time {
            tracing::trace!(reference = %reference.display(), "listed file newer than destination");
            return Ok(true);
        }
    }

    Ok(false)
}
