//! Property-based tests for `Luggage`.

use super::Luggage;
use proptest::prelude::*;

proptest! {
    #[test]
    fn luggage_accepts_exactly_the_allowance(value in any::<u8>()) {
        let parsed = Luggage::try_from(value);
        prop_assert_eq!(parsed.is_ok(), value <= Luggage::MAX);
    }

    #[test]
    fn luggage_display_parses_back(value in Luggage::MIN..=Luggage::MAX) {
        let bags = Luggage::try_from(value).unwrap();
        let reparsed: Luggage = bags.to_string().parse().unwrap();
        prop_assert_eq!(bags, reparsed);
    }

    #[test]
    fn checked_add_never_exceeds_max(start in Luggage::MIN..=Luggage::MAX, extra in any::<u8>()) {
        let bags = Luggage::try_from(start).unwrap();
        match bags.checked_add(extra) {
            Ok(total) => {
                prop_assert!(total.value() <= Luggage::MAX);
                prop_assert_eq!(total.value(), start + extra);
            }
            Err(_) => prop_assert!(u16::from(start) + u16::from(extra) > u16::from(Luggage::MAX)),
        }
    }

    #[test]
    fn remaining_plus_value_is_max(value in Luggage::MIN..=Luggage::MAX) {
        let bags = Luggage::try_from(value).unwrap();
        prop_assert_eq!(bags.value() + bags.remaining(), Luggage::MAX);
    }
}
