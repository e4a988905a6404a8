//! Property tests for key extraction.

use proptest::prelude::*;

use keymirror::KeyExtractor;

fn attr_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ._:/-]{0,16}").unwrap()
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Extraction never panics on arbitrary input.
    #[test]
    fn property_extract_never_panics(doc in "(?s).{0,256}") {
        let _ = KeyExtractor::new().extract(&doc);
    }

    /// PROPERTY: Extraction never panics on tag soup.
    #[test]
    fn property_extract_never_panics_on_markup(doc in "[<>/=\" a-zA-Z!?-]{0,128}") {
        let _ = KeyExtractor::new().try_extract(&doc, "soup");
    }

    /// PROPERTY: Well-formed documents yield every non-empty key in order.
    #[test]
    fn property_extract_preserves_order(
        pairs in proptest::collection::vec((attr_text(), attr_text()), 0..=8)
    ) {
        let mut doc = String::from("<configuration><appSettings>");
        for (k, v) in &pairs {
            doc.push_str(&format!("<add key=\"{}\" value=\"{}\"/>", escape_attr(k), escape_attr(v)));
        }
        doc.push_str("</appSettings></configuration>");

        let snapshot = KeyExtractor::new().try_extract(&doc, "web.config").unwrap();
        let expected: Vec<(&str, &str)> = pairs
            .iter()
            .filter(|(k, _)| !k.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let actual: Vec<(&str, &str)> = snapshot
            .entries()
            .iter()
            .map(|e| (e.key(), e.value()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: A document without the container yields no keys.
    #[test]
    fn property_no_container_no_keys(
        keys in proptest::collection::vec("[a-z]{1,6}", 0..=5)
    ) {
        let mut doc = String::from("<configuration><system.web>");
        for k in &keys {
            doc.push_str(&format!("<add key=\"{}\" value=\"x\"/>", k));
        }
        doc.push_str("</system.web></configuration>");

        prop_assert!(KeyExtractor::new().extract(&doc).is_empty());
    }
}
