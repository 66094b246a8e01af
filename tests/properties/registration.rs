//! Property tests for flavour registration line patching.

use proptest::prelude::*;

use prepkit::domain::policies::RegistrationPolicy;

/// Lines that can never match either policy
fn unrelated_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-eg-z_ =\t#.\"-]{0,40}(\r?\n)?")
        .unwrap()
        .prop_filter("must not look like a flavours line", |s| {
            !s.trim_start().starts_with("flavours") && !s.trim_start().starts_with("getall")
        })
}

fn flavour_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: content without a matching line comes back byte-identical.
    #[test]
    fn property_unmatched_content_is_untouched(
        lines in proptest::collection::vec(unrelated_line(), 0..12),
        flavour in flavour_name(),
    ) {
        let content: String = lines.concat();
        for policy in [
            RegistrationPolicy::rules_flavours().unwrap(),
            RegistrationPolicy::getabis("amd64").unwrap(),
        ] {
            let rewrite = policy.apply(&content, &flavour);
            prop_assert_eq!(rewrite.matched, 0);
            prop_assert_eq!(&rewrite.content, &content);
        }
    }

    /// PROPERTY: only the flavours line changes, and only by the appended name.
    #[test]
    fn property_flavours_line_gains_name(
        before in proptest::collection::vec(unrelated_line(), 0..6),
        after in proptest::collection::vec(unrelated_line(), 0..6),
        existing in proptest::collection::vec(flavour_name(), 1..4),
        flavour in flavour_name(),
    ) {
        // unrelated lines need terminators so the flavours line stays separate
        let terminate = |l: &String| if l.ends_with('\n') { l.clone() } else { format!("{}\n", l) };
        let before: String = before.iter().map(terminate).collect();
        let after: String = after.iter().map(terminate).collect();
        let line = format!("flavours\t= {}\n", existing.join(" "));
        let content = format!("{}{}{}", before, line, after);

        let rewrite = RegistrationPolicy::rules_flavours().unwrap().apply(&content, &flavour);

        let expected = format!(
            "{}flavours\t= {} {}\n{}",
            before,
            existing.join(" "),
            flavour,
            after
        );
        prop_assert_eq!(rewrite.matched, 1);
        prop_assert_eq!(rewrite.content, expected);
    }
}
