//! Resource descriptor reference extraction
//!
//! Qt resource files list their assets one per line:
//!
//! ```text
//! <qresource>
//!     <file>icons/open.png</file>
//! </qresource>
//! ```
//!
//! Only the literal `<file>` opening tag is recognized; the enclosed text is
//! trimmed and interpreted relative to the descriptor's own directory.

use std::path::{Path, PathBuf};

const OPEN_TAG: &str = "<file>";
const CLOSE_TAG: &str = "</file>";

/// Extract the file references from descriptor text, in file order.
///
/// Text after `<file>` runs to the next `</file>` or, when the closing tag is
/// missing, to the end of the line. Empty references are dropped.
pub fn parse_file_references(text: &str) -> Vec<&str> {
    let mut refs = Vec::new();
    for line in text.lines() {
        let mut rest = line;
        while let Some(start) = rest.find(OPEN_TAG) {
            let after = &rest[start + OPEN_TAG.len()..];
            let (inner, remainder) = match after.find(CLOSE_TAG) {
                Some(end) => (&after[..end], &after[end + CLOSE_TAG.len()..]),
                None => (after, ""),
            };
            let inner = inner.trim();
            if !inner.is_empty() {
                refs.push(inner);
            }
            rest = remainder;
        }
    }
    refs
}

/// Resolve references against the directory containing `descriptor`.
pub fn resolve_references(descriptor: &Path, text: &str) -> Vec<PathBuf> {
    let base = descriptor.parent().unwrap_or_else(|| Path::new(""));
    parse_file_references(text)
        .into_iter()
        .map(|r| base.join(r))
        .collect()
}
