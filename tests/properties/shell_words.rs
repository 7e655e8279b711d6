//! Property tests for compiler option quoting.

use proptest::prelude::*;

use qtac::infrastructure::shell::{join, split};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: splitting never panics, it either succeeds or reports why.
    #[test]
    fn property_split_never_panics(input in "(?s).{0,128}") {
        let _ = split(&input);
    }

    /// PROPERTY: a joined command line splits back into the same words.
    #[test]
    fn property_join_then_split_preserves_words(
        words in proptest::collection::vec("[^\u{0}]{0,12}", 0..6),
    ) {
        let line = join(&words);
        prop_assert_eq!(split(&line).unwrap(), words);
    }
}
