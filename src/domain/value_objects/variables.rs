//! Variable set value object - placeholder values for destination templates
//!
//! Templates reference variables as `%%NAME%%`. Three names are derived from
//! each source file and may not be defined by users:
//!
//! - `%%FILENAME%%` - file name without its last extension
//! - `%%EXT%%` - last extension without the leading period
//! - `%%DIRNAME%%` - directory containing the source file

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{QtacError, QtacResult};

/// Delimiter wrapped around variable names in templates
pub const DELIMITER: &str = "%%";

pub const FILENAME: &str = "FILENAME";
pub const EXT: &str = "EXT";
pub const DIRNAME: &str = "DIRNAME";

/// Names computed per source file
pub const RESERVED_NAMES: [&str; 3] = [FILENAME, EXT, DIRNAME];

/// Returns true if `name` is one of the derived variables
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Wrap a variable name in the template delimiter (`NAME` -> `%%NAME%%`)
pub fn placeholder(name: &str) -> String {
    format!("{DELIMITER}{name}{DELIMITER}")
}

/// Named values available to a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    values: BTreeMap<String, String>,
}

impl VariableSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from user-supplied variables.
    ///
    /// Fails if any name collides with a derived variable.
    pub fn from_user<'a, I>(variables: I) -> QtacResult<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut values = BTreeMap::new();
        for (name, value) in variables {
            if is_reserved(name) {
                return Err(QtacError::ReservedVariable { name: name.clone() });
            }
            values.insert(name.clone(), value.clone());
        }
        Ok(Self { values })
    }

    /// Copy of this set extended with the variables derived from `source`.
    ///
    /// `source` is used as given, so a relative glob match yields a relative
    /// `DIRNAME`.
    pub fn for_source(&self, source: &Path) -> Self {
        let mut derived = self.clone();
        let filename = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = source
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dirname = source
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        derived.values.insert(FILENAME.to_string(), filename);
        derived.values.insert(EXT.to_string(), ext);
        derived.values.insert(DIRNAME.to_string(), dirname);
        derived
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every `%%NAME%%` for a known NAME in `template`.
    pub fn substitute(&self, template: &str) -> String {
        substitute(template, self)
    }
}

/// Replace every `%%NAME%%` whose NAME is in `variables`.
///
/// A single left-to-right pass: substituted values are never rescanned, so
/// the result does not depend on variable order. At each `%` the longest
/// matching placeholder wins; on a miss the scan moves on by one character,
/// so `%%%NAME%%` becomes `%` followed by the value. Unknown placeholders are
/// kept verbatim.
pub fn substitute(template: &str, variables: &VariableSet) -> String {
    let placeholders: Vec<(String, &str)> = variables
        .values
        .iter()
        .map(|(name, value)| (placeholder(name), value.as_str()))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(DELIMITER) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let matched = placeholders
            .iter()
            .filter(|(token, _)| rest.starts_with(token.as_str()))
            .max_by_key(|(token, _)| token.len());
        match matched {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push('%');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
