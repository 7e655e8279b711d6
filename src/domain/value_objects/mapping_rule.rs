//! Mapping rule value object - which sources to compile and where to put them

use serde::Deserialize;

/// A `(source pattern, destination template)` pair.
///
/// Deserializes from a two-element list, e.g. `["gui/*.ui", "generated/%%FILENAME%%_ui.py"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct MappingRule {
    /// Glob expression selecting source files (`**` recurses)
    pub source_pattern: String,
    /// Destination path with `%%NAME%%` placeholders
    pub destination_template: String,
}

impl MappingRule {
    pub fn new(source_pattern: impl Into<String>, destination_template: impl Into<String>) -> Self {
        Self {
            source_pattern: source_pattern.into(),
            destination_template: destination_template.into(),
        }
    }

    /// Pair up a flat `[src, dst, src, dst, ...]` list.
    ///
    /// Returns `None` when the list has an odd length.
    pub fn from_flat_pairs(items: &[String]) -> Option<Vec<Self>> {
        if items.len() % 2 != 0 {
            return None;
        }
        Some(
            items
                .chunks_exact(2)
                .map(|pair| Self::new(pair[0].clone(), pair[1].clone()))
                .collect(),
        )
    }
}

impl From<(String, String)> for MappingRule {
    fn from((source_pattern, destination_template): (String, String)) -> Self {
        Self {
            source_pattern,
            destination_template,
        }
    }
}
