//! Builders for the canonical conditions.
//!
//! Each builder is a pure function from its arguments to a reusable
//! [`Condition`]. Builders with a default message template have a
//! custom-message form via [`Condition::with_message`].
//!
//! # Example
//!
//! ```rust
//! use warden::conditions::{has_maximum_length, is_less_than_or_equal_to, satisfies};
//!
//! let small = is_less_than_or_equal_to(4);
//! let short = has_maximum_length::<String>(10);
//! let even = satisfies(|n: &i32| n % 2 == 0, "{val} must be even");
//!
//! assert!(small.check(&4));
//! assert!(!short.check(&"far too long a name".to_string()));
//! assert!(even.check(&2));
//! ```

mod comparable;
mod text;

pub use comparable::{
    is_between, is_greater_than, is_greater_than_or_equal_to, is_less_than,
    is_less_than_or_equal_to,
};
pub use text::{
    has_length_between, has_maximum_length, has_minimum_length, is_equal_to_using,
    is_not_null_or_empty, is_null_or_empty, matches, matches_pattern, matches_regex,
    MatchOptions, StringComparison, TextValue,
};

use crate::core::{Condition, TemplateArg};

/// Custom check with a caller-supplied message.
pub fn satisfies<T, F>(predicate: F, message: impl Into<String>) -> Condition<T>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Condition::new(predicate, message)
}

/// Value must equal `expected`. For `Option` properties, absent equals absent.
pub fn is_equal_to<T>(expected: T) -> Condition<T>
where
    T: PartialEq + TemplateArg + Send + Sync + 'static,
{
    let arg = expected.to_arg();
    Condition::new(move |value: &T| *value == expected, "{val} must be the same as {arg1}")
        .with_args(vec![arg])
}

/// Value must differ from `unexpected`.
pub fn is_not_equal_to<T>(unexpected: T) -> Condition<T>
where
    T: PartialEq + TemplateArg + Send + Sync + 'static,
{
    let arg = unexpected.to_arg();
    Condition::new(move |value: &T| *value != unexpected, "{val} must not be {arg1}")
        .with_args(vec![arg])
}
