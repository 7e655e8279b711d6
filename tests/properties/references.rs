//! Property tests for resource descriptor reference scanning.

use proptest::prelude::*;

use qtac::domain::services::parse_file_references;

fn reference() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_./-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning never panics on arbitrary text.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,512}") {
        let _ = parse_file_references(&text);
    }

    /// PROPERTY: every `<file>` entry is found, in order, trimmed.
    #[test]
    fn property_finds_every_entry(
        refs in proptest::collection::vec(reference(), 0..10),
        indent in "[ \t]{0,4}",
    ) {
        let text: String = refs
            .iter()
            .map(|r| format!("{indent}<file> {r} </file>\n"))
            .collect();
        let text = format!("<RCC>\n<qresource prefix=\"/\">\n{text}</qresource>\n</RCC>\n");

        let found = parse_file_references(&text);

        prop_assert_eq!(found, refs.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
