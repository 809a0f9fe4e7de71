//! Conditions over ordered values.
//!
//! Bounds are compared with `PartialOrd`. A bound that is unordered with
//! itself, such as `f64::NAN`, makes every comparison false, so the
//! single-bound builders reject every value with it; `is_between` refuses it
//! outright.

use crate::builder::BuildError;
use crate::core::{Condition, TemplateArg};
use std::cmp::Ordering;

macro_rules! bound_condition {
    ($(#[$meta:meta])* $name:ident, $op:tt, $template:literal) => {
        $(#[$meta])*
        pub fn $name<T>(bound: T) -> Condition<T>
        where
            T: PartialOrd + TemplateArg + Send + Sync + 'static,
        {
            let arg = bound.to_arg();
            Condition::new(move |value: &T| *value $op bound, $template).with_args(vec![arg])
        }
    };
}

bound_condition!(
    /// Value must be `<= bound` under its natural ordering.
    ///
    /// ```rust
    /// use warden::conditions::is_less_than_or_equal_to;
    ///
    /// let at_most_four = is_less_than_or_equal_to(4);
    ///
    /// assert!(at_most_four.check(&4));
    /// assert!(!at_most_four.check(&8));
    /// ```
    is_less_than_or_equal_to,
    <=,
    "{val} must be less than or equal to {arg1}"
);

bound_condition!(
    /// Value must be `< bound`.
    is_less_than,
    <,
    "{val} must be less than {arg1}"
);

bound_condition!(
    /// Value must be `> bound`.
    is_greater_than,
    >,
    "{val} must be greater than {arg1}"
);

bound_condition!(
    /// Value must be `>= bound`.
    is_greater_than_or_equal_to,
    >=,
    "{val} must be greater than or equal to {arg1}"
);

/// Value must lie in `min..=max`.
///
/// Fails with [`BuildError::InvalidRange`] when `min > max` or the bounds are
/// unordered (a NaN bound).
pub fn is_between<T>(min: T, max: T) -> Result<Condition<T>, BuildError>
where
    T: PartialOrd + TemplateArg + Send + Sync + 'static,
{
    let args = vec![min.to_arg(), max.to_arg()];
    if !matches!(min.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
        return Err(BuildError::InvalidRange {
            min: args[0].clone(),
            max: args[1].clone(),
        });
    }

    Ok(Condition::new(
        move |value: &T| *value >= min && *value <= max,
        "{val} must be between {arg1} and {arg2}",
    )
    .with_args(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn less_than_or_equal_includes_bound() {
        let condition = is_less_than_or_equal_to(4);

        assert!(condition.check(&1));
        assert!(condition.check(&4));
        assert!(!condition.check(&8));
        assert_eq!(condition.args(), ["4".to_string()]);
    }

    #[test]
    fn strict_bounds_exclude_bound() {
        assert!(!is_less_than(4).check(&4));
        assert!(is_less_than(4).check(&3));
        assert!(!is_greater_than(4).check(&4));
        assert!(is_greater_than(4).check(&5));
        assert!(is_greater_than_or_equal_to(4).check(&4));
        assert!(!is_greater_than_or_equal_to(4).check(&3));
    }

    #[test]
    fn works_with_floats_and_strings() {
        assert!(is_less_than_or_equal_to(1.5).check(&1.5));
        assert!(!is_less_than_or_equal_to(1.5).check(&f64::NAN));
        assert!(is_less_than("m").check(&"a"));
    }

    #[test]
    fn between_is_inclusive() {
        let condition = is_between(18, 65).unwrap();

        assert!(condition.check(&18));
        assert!(condition.check(&65));
        assert!(!condition.check(&17));
        assert!(!condition.check(&66));
        assert_eq!(condition.template(), "{val} must be between {arg1} and {arg2}");
        assert_eq!(condition.args(), ["18".to_string(), "65".to_string()]);
    }

    #[test]
    fn between_rejects_nan_bound() {
        assert!(matches!(
            is_between(f64::NAN, 10.0),
            Err(BuildError::InvalidRange { ref min, .. }) if min == "NaN"
        ));
        assert!(matches!(
            is_between(0.0, f64::NAN),
            Err(BuildError::InvalidRange { .. })
        ));
    }

    #[test]
    fn between_accepts_single_point_range() {
        let condition = is_between(2.5, 2.5).unwrap();

        assert!(condition.check(&2.5));
        assert!(!condition.check(&2.6));
    }

    #[test]
    fn between_rejects_inverted_range() {
        let err = is_between(10, 1).unwrap_err();

        assert!(matches!(
            err,
            BuildError::InvalidRange { ref min, ref max } if min == "10" && max == "1"
        ));
    }
}
