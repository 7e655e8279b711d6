//! Source pattern expansion
//!
//! Patterns follow shell glob rules: `*` and `?` stay within one path
//! component, `[...]` matches a character class and `**` matches any number
//! of directories. Entries starting with `.` are only matched by a pattern
//! component that itself starts with `.`, and `**` never descends into them.
//!
//! The pattern is split into a literal base directory and a glob remainder;
//! the base is walked with `ignore` (all ignore files disabled) and each file
//! is matched against the remainder anchored at the base.

use std::path::{Path, PathBuf};

use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

use crate::error::{QtacError, QtacResult};

const META: &[char] = &['*', '?', '['];

fn has_meta(component: &str) -> bool {
    component.contains(META)
}

/// Whether every dot-prefixed component of `relative` lines up with a
/// dot-prefixed pattern component.
///
/// Components before a `**` align from the start, components after it from
/// the end; whatever `**` itself spans must not be hidden.
fn hidden_allowed(rest: &[&str], relative: &Path) -> bool {
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let globstar = rest.iter().position(|c| *c == "**");

    parts.iter().enumerate().all(|(i, part)| {
        if !part.starts_with('.') {
            return true;
        }
        let component = match globstar {
            Some(g) if i >= g => {
                let from_end = parts.len() - i;
                let tail = rest.len() - g - 1;
                (from_end <= tail).then(|| rest[rest.len() - from_end])
            }
            _ => rest.get(i).copied(),
        };
        component.is_some_and(|c| c.starts_with('.'))
    })
}

/// Expand `pattern` relative to `cwd`.
///
/// Matches are returned as written: a relative pattern yields paths relative
/// to `cwd`, an absolute one yields absolute paths. Results are sorted
/// lexically per directory. Only files (and links to files) are returned.
pub fn expand(pattern: &str, cwd: &Path) -> QtacResult<Vec<PathBuf>> {
    let components: Vec<&str> = pattern.split('/').collect();
    let split_at = components
        .iter()
        .position(|c| has_meta(c))
        .unwrap_or(components.len());

    if split_at == components.len() {
        let path = PathBuf::from(pattern);
        return Ok(if cwd.join(&path).is_file() {
            vec![path]
        } else {
            Vec::new()
        });
    }

    let base = components[..split_at].join("/");
    let base = if pattern.starts_with('/') && base.is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(base)
    };
    let rest = &components[split_at..];
    let walk_root = if base.as_os_str().is_empty() {
        cwd.to_path_buf()
    } else {
        cwd.join(&base)
    };
    if !walk_root.is_dir() {
        return Ok(Vec::new());
    }

    let invalid = |e: ignore::Error| QtacError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    };
    let mut builder = OverrideBuilder::new(&walk_root);
    builder
        .add(&format!("/{}", rest.join("/")))
        .map_err(invalid)?;
    let matcher = builder.build().map_err(invalid)?;

    let max_depth = if rest.iter().any(|c| c.contains("**")) {
        None
    } else {
        Some(rest.len())
    };

    let walker = WalkBuilder::new(&walk_root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(true)
        .max_depth(max_depth)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut matches = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(pattern, error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.depth() == 0 || !entry.path().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&walk_root) else {
            continue;
        };
        if matcher.matched(relative, false).is_whitelist() && hidden_allowed(rest, relative) {
            matches.push(base.join(relative));
        }
    }

    tracing::trace!(pattern, count = matches.len(), "expanded source pattern");
    Ok(matches)
}
