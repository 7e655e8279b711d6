//! Property tests for `%%NAME%%` substitution.

use std::collections::BTreeMap;
use std::path::Path;

use proptest::prelude::*;

use qtac::domain::value_objects::variables::{is_reserved, placeholder};
use qtac::VariableSet;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z0-9_]{0,7}")
        .unwrap()
        .prop_filter("reserved", |n| !is_reserved(n))
}

fn plain_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9/._-]{0,12}").unwrap()
}

/// Literal template text, including stray `%` runs next to placeholders
fn template_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9/._%-]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: substitution never panics on arbitrary templates.
    #[test]
    fn property_substitute_never_panics(template in "(?s).{0,128}") {
        let vars = VariableSet::new().for_source(Path::new("gui/main.ui"));
        let _ = vars.substitute(&template);
    }

    /// PROPERTY: no placeholder for a declared name survives substitution.
    #[test]
    fn property_declared_placeholders_are_replaced(
        variables in proptest::collection::btree_map(name(), plain_text(), 1..5),
        pieces in proptest::collection::vec((template_text(), 0usize..8), 0..8),
    ) {
        let names: Vec<&String> = variables.keys().collect();
        let template: String = pieces
            .iter()
            .map(|(text, i)| format!("{}{}", text, placeholder(names[i % names.len()])))
            .collect();

        let vars = VariableSet::from_user(&variables).unwrap();
        let out = vars.substitute(&template);

        for name in variables.keys() {
            prop_assert!(
                !out.contains(&placeholder(name)),
                "left over {} in {:?}",
                placeholder(name),
                out
            );
        }
    }

    /// PROPERTY: text without delimiters is returned unchanged.
    #[test]
    fn property_plain_text_is_untouched(text in plain_text()) {
        let vars = VariableSet::new().for_source(Path::new("a/b.qrc"));
        prop_assert_eq!(vars.substitute(&text), text);
    }

    /// PROPERTY: defining a reserved name is always rejected.
    #[test]
    fn property_reserved_names_rejected(value in plain_text(), reserved in 0usize..3) {
        let name = ["FILENAME", "EXT", "DIRNAME"][reserved];
        let mut variables = BTreeMap::new();
        variables.insert(name.to_string(), value);
        prop_assert!(VariableSet::from_user(&variables).is_err());
    }
}
