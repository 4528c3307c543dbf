//! Property-based tests for field validation.

use chrono::NaiveDate;
use proptest::prelude::*;

use super::{title_case, validate_on, FieldKind, COUNTRIES};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn revalidates_to_itself(kind: FieldKind, raw: &str) -> Result<(), TestCaseError> {
    if let Ok(first) = validate_on(kind, raw, today()) {
        let second = validate_on(kind, &first.to_cell(), today());
        prop_assert_eq!(second, Ok(first));
    }
    Ok(())
}

proptest! {
    #[test]
    fn names_are_idempotent(raw in "[ a-zA-Z'-]{0,24}") {
        revalidates_to_itself(FieldKind::GivenNames, &raw)?;
        revalidates_to_itself(FieldKind::Surname, &raw)?;
    }

    #[test]
    fn unicode_names_are_idempotent(raw in "[ \\p{L}'-]{0,24}") {
        revalidates_to_itself(FieldKind::GivenNames, &raw)?;
        revalidates_to_itself(FieldKind::Surname, &raw)?;
    }

    #[test]
    fn title_case_keeps_character_count(raw in "[ \\p{L}'-]{0,24}") {
        prop_assert_eq!(title_case(&raw).chars().count(), raw.chars().count());
    }

    #[test]
    fn names_with_a_letter_are_accepted(raw in "[a-zA-Z][ a-zA-Z'-]{0,20}") {
        prop_assert!(validate_on(FieldKind::Surname, &raw, today()).is_ok());
    }

    #[test]
    fn names_with_digits_are_rejected(prefix in "[a-z]{0,5}", digit in "[0-9]", suffix in "[a-z]{0,5}") {
        let raw = format!("{prefix}{digit}{suffix}");
        prop_assert!(validate_on(FieldKind::GivenNames, &raw, today()).is_err());
    }

    #[test]
    fn title_case_preserves_length_for_ascii(raw in "[ a-zA-Z'-]{0,24}") {
        prop_assert_eq!(title_case(&raw).len(), raw.len());
    }

    #[test]
    fn passports_are_idempotent(raw in "[ a-zA-Z0-9]{0,12}") {
        revalidates_to_itself(FieldKind::Passport, &raw)?;
    }

    #[test]
    fn passports_are_uppercase(raw in "[a-zA-Z0-9]{1,12}") {
        let value = validate_on(FieldKind::Passport, &raw, today()).unwrap().to_cell();
        prop_assert_eq!(value, raw.to_ascii_uppercase());
    }

    #[test]
    fn nationalities_are_idempotent(index in 0..COUNTRIES.len()) {
        let raw = COUNTRIES[index].to_lowercase();
        revalidates_to_itself(FieldKind::Nationality, &raw)?;
    }

    #[test]
    fn past_dates_are_kept_verbatim(days in 1i64..40_000) {
        let date = today() - chrono::Duration::days(days);
        let raw = date.format("%Y-%m-%d").to_string();
        let value = validate_on(FieldKind::DateOfBirth, &raw, today()).unwrap();
        prop_assert_eq!(value.to_cell(), raw.clone());
        revalidates_to_itself(FieldKind::DateOfBirth, &raw)?;
    }

    #[test]
    fn future_dates_are_rejected(days in 0i64..40_000) {
        let date = today() + chrono::Duration::days(days);
        let raw = date.format("%Y-%m-%d").to_string();
        prop_assert!(validate_on(FieldKind::DateOfBirth, &raw, today()).is_err());
    }

    #[test]
    fn luggage_accepts_only_zero_to_two(value in 0u32..1000) {
        let result = validate_on(FieldKind::Luggage, &value.to_string(), today());
        prop_assert_eq!(result.is_ok(), value <= 2);
    }
}
