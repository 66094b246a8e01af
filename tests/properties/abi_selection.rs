//! Property tests for ABI directory selection.

use proptest::prelude::*;

use prepkit::domain::value_objects::select_latest;

fn abi_name() -> impl Strategy<Value = String> {
    (1u32..6, 0u32..20, 1u32..60, 1u32..120)
        .prop_map(|(major, minor, abi, upload)| format!("{}.{}.0-{}.{}", major, minor, abi, upload))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the chosen name is the lexicographic maximum, whatever the order.
    #[test]
    fn property_choice_is_lexicographic_max(
        mut names in proptest::collection::vec(abi_name(), 1..10),
    ) {
        let selection = select_latest(&names).unwrap();
        let max = names.iter().max().unwrap().clone();
        prop_assert_eq!(&selection.chosen, &max);

        names.reverse();
        prop_assert_eq!(select_latest(&names).unwrap().chosen, max);
    }

    /// PROPERTY: a reported natural choice always differs from the chosen one.
    #[test]
    fn property_natural_choice_differs(
        names in proptest::collection::vec(abi_name(), 1..10),
    ) {
        let selection = select_latest(&names).unwrap();
        if let Some(natural) = selection.natural_choice {
            prop_assert_ne!(natural, selection.chosen);
        }
    }
}
