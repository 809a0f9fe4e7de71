//! Property-based tests for conditions and validators.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use warden::conditions::{
    has_maximum_length, has_minimum_length, is_equal_to, is_less_than_or_equal_to,
    is_not_null_or_empty, is_null_or_empty, satisfies,
};
use warden::{field, Validator};

#[derive(Clone, Debug)]
struct Subject {
    value: i64,
    text: Option<String>,
}

prop_compose! {
    fn arbitrary_text()(text in proptest::option::of("[a-zA-Z ]{0,12}")) -> Option<String> {
        text
    }
}

prop_compose! {
    fn arbitrary_subject()(value in -100i64..100, text in arbitrary_text()) -> Subject {
        Subject { value, text }
    }
}

fn validator() -> Validator<Subject> {
    Validator::builder()
        .rule(field!(Subject, value), is_less_than_or_equal_to(4))
        .rule(field!(Subject, text), is_not_null_or_empty())
        .rule(field!(Subject, text), has_maximum_length(8))
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn less_than_or_equal_matches_ordering(value in any::<i32>(), bound in any::<i32>()) {
        prop_assert_eq!(is_less_than_or_equal_to(bound).check(&value), value <= bound);
    }

    #[test]
    fn less_than_or_equal_accepts_bound(bound in any::<i64>()) {
        prop_assert!(is_less_than_or_equal_to(bound).check(&bound));
    }

    #[test]
    fn null_or_empty_negates_not_null_or_empty(text in arbitrary_text()) {
        let required = is_not_null_or_empty::<Option<String>>();
        let blank = is_null_or_empty::<Option<String>>();
        prop_assert_eq!(required.check(&text), !blank.check(&text));
    }

    #[test]
    fn length_checks_treat_absent_as_empty(n in 0usize..20) {
        prop_assert!(has_maximum_length::<Option<String>>(n).check(&None));
        prop_assert_eq!(has_minimum_length::<Option<String>>(n).check(&None), n == 0);
    }

    #[test]
    fn ordinal_equality_is_case_sensitive(text in "[a-z]{1,10}") {
        let upper = text.to_uppercase();
        prop_assert!(is_equal_to(Some(text.clone())).check(&Some(text.clone())));
        prop_assert!(!is_equal_to(Some(text)).check(&Some(upper)));
    }

    #[test]
    fn custom_message_is_verbatim(value in 5i64..1000, message in "[A-Za-z ,.!]{1,40}") {
        let validator = Validator::builder()
            .rule(field!(Subject, value), is_less_than_or_equal_to(4).with_message(message.clone()))
            .build()
            .unwrap();

        let report = validator.validate(&Subject { value, text: None });
        prop_assert_eq!(&report.violations()[0].error_message, &message);
    }

    #[test]
    fn condition_is_reusable_across_subjects(values in prop::collection::vec(any::<i16>(), 1..20)) {
        let condition = satisfies(|v: &i16| v % 2 == 0, "{val} must be even");
        for value in values {
            prop_assert_eq!(condition.check(&value), condition.check(&value));
            prop_assert_eq!(condition.check(&value), value % 2 == 0);
        }
    }

    #[test]
    fn validation_is_deterministic(subject in arbitrary_subject()) {
        let validator = validator();
        let first = validator.validate(&subject);
        let second = validator.validate(&subject);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn report_is_valid_iff_no_violations(subject in arbitrary_subject()) {
        let report = validator().validate(&subject);
        prop_assert_eq!(report.is_valid(), report.violations().is_empty());

        let expected = usize::from(subject.value > 4)
            + usize::from(subject.text.as_deref().map_or(true, str::is_empty))
            + usize::from(subject.text.as_deref().map_or(0, |t| t.chars().count()) > 8);
        prop_assert_eq!(report.violations().len(), expected);
    }
}
