//! Property tests for option file parsing.

use proptest::prelude::*;

use prepkit::domain::value_objects::ConfigureOptions;

fn option() -> impl Strategy<Value = String> {
    proptest::string::string_regex("--?[a-z][a-z0-9=/_-]{0,20}").unwrap()
}

fn comment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("#[ a-z0-9-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: options keep file order; comments and blank lines vanish.
    #[test]
    fn property_option_order_is_preserved(
        entries in proptest::collection::vec(
            prop_oneof![
                option().prop_map(Some),
                comment().prop_map(|_| None),
                Just(None::<String>),
            ],
            0..16,
        ),
        comments in proptest::collection::vec(comment(), 16),
    ) {
        let mut content = String::new();
        for (idx, entry) in entries.iter().enumerate() {
            match entry {
                Some(opt) => content.push_str(&format!("  {}\n", opt)),
                None if idx % 2 == 0 => content.push_str(&format!("{}\n", comments[idx])),
                None => content.push('\n'),
            }
        }

        let parsed = ConfigureOptions::parse(&content);

        let expected: Vec<String> = entries.into_iter().flatten().collect();
        prop_assert_eq!(parsed.args(), expected.as_slice());
        prop_assert_eq!(parsed.joined(), expected.join(" "));
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = ConfigureOptions::parse(&s);
    }
}
