//! Property tests for service patterns and name derivation.

use std::path::Path;

use proptest::prelude::*;

use mono_meta::ServicePattern;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the derived name is the value the wildcard segment took.
    #[test]
    fn property_name_is_wildcard_value(
        prefix in proptest::collection::vec(segment(), 0..3),
        suffix in proptest::collection::vec(segment(), 0..3),
        name in segment(),
    ) {
        let mut parts = prefix.clone();
        parts.push("*".to_string());
        parts.extend(suffix.iter().cloned());
        let pattern = ServicePattern::new(&parts.join("/")).unwrap();

        let root = Path::new("/repo");
        let mut matched = root.to_path_buf();
        for p in &prefix {
            matched.push(p);
        }
        matched.push(&name);
        for s in &suffix {
            matched.push(s);
        }

        prop_assert_eq!(pattern.name_of(root, &matched), name);
    }

    /// PROPERTY: pattern parsing never panics.
    #[test]
    fn property_pattern_parsing_never_panics(raw in "\\PC{0,40}") {
        let _ = ServicePattern::new(&raw);
    }
}
