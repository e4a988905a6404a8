//! Property tests for identifier derivation.

use proptest::prelude::*;

use keymirror::Identifier;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Derived identifiers only use `[A-Za-z0-9_]` and never start with a digit.
    #[test]
    fn property_identifier_is_valid(key in "(?s).{0,40}") {
        let ident = Identifier::derive(&key);
        let s = ident.as_str();

        prop_assert!(!s.is_empty());
        prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!s.starts_with(|c: char| c.is_ascii_digit()));
    }

    /// PROPERTY: Derivation is deterministic.
    #[test]
    fn property_identifier_is_deterministic(key in "(?s).{0,40}") {
        prop_assert_eq!(Identifier::derive(&key), Identifier::derive(&key));
    }

    /// PROPERTY: One underscore per replaced character, plus at most one prefix.
    #[test]
    fn property_identifier_length(key in "(?s).{1,40}") {
        let ident = Identifier::derive(&key);
        let chars = key.chars().count();
        let len = ident.as_str().chars().count();
        prop_assert!(len == chars || len == chars + 1);
    }

    /// PROPERTY: Keys that are already identifiers pass through unchanged.
    #[test]
    fn property_valid_identifiers_pass_through(key in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
        let ident = Identifier::derive(&key);
        prop_assert_eq!(ident.as_str(), key.as_str());
    }
}

#[test]
fn identifier_examples() {
    assert_eq!(Identifier::derive("My-Key.1").as_str(), "My_Key_1");
    assert_eq!(Identifier::derive("1abc").as_str(), "_1abc");
}
