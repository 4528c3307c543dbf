//! Property-based tests for booking references.

use std::collections::HashSet;

use super::{BookingReference, ReferenceGenerator};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{2}[1-9]{2}[A-Z]{2}[1-9]{2}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn pattern_strings_always_parse(text in reference_strategy()) {
        let parsed = text.parse::<BookingReference>();
        prop_assert!(parsed.is_ok());
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.as_str(), text.as_str());
    }

    #[test]
    fn lowercase_never_parses(text in "[a-z]{2}[1-9]{2}[a-z]{2}[1-9]{2}") {
        prop_assert!(text.parse::<BookingReference>().is_err());
    }

    #[test]
    fn zero_digits_never_parse(prefix in "[A-Z]{2}", suffix in "[1-9][A-Z]{2}[1-9]{2}") {
        let text = format!("{prefix}0{suffix}");
        prop_assert!(text.parse::<BookingReference>().is_err());
    }

    #[test]
    fn generated_references_are_fresh_and_well_formed(
        seed in any::<u64>(),
        used in prop::collection::hash_set(reference_strategy(), 0..50),
    ) {
        let mut generator = ReferenceGenerator::new(StdRng::seed_from_u64(seed));
        let generated = generator.generate(&used);
        prop_assert!(!used.contains(generated.as_str()));
        prop_assert!(generated.as_str().parse::<BookingReference>().is_ok());
    }

    #[test]
    fn generator_avoids_its_own_first_draws(seed in any::<u64>(), taken in 1usize..20) {
        let mut probe = ReferenceGenerator::new(StdRng::seed_from_u64(seed));
        let used: HashSet<String> = (0..taken).map(|_| probe.draw().into_inner()).collect();

        let mut generator = ReferenceGenerator::new(StdRng::seed_from_u64(seed));
        let generated = generator.generate(&used);
        prop_assert!(!used.contains(generated.as_str()));
    }
}
