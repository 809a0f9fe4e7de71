//! The validator: an immutable, ordered set of rule bindings.

use crate::builder::{BuildError, Rules, ValidatorBuilder};
use crate::engine::binding::RuleBinding;
use crate::engine::report::{ValidationReport, Violation};
use std::any::type_name;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validates subjects of type `S` against a fixed set of rules.
///
/// A validator is only obtainable from a builder, so its rules are collected
/// exactly once. It holds no mutable state: one instance can be shared across
/// threads and used for any number of concurrent `validate` calls.
///
/// # Example
///
/// ```rust
/// use warden::conditions::{has_maximum_length, is_not_null_or_empty};
/// use warden::{field, Validator};
///
/// struct Signup {
///     username: Option<String>,
/// }
///
/// let validator = Validator::builder()
///     .rule(field!(Signup, username), is_not_null_or_empty())
///     .rule(field!(Signup, username), has_maximum_length(12))
///     .build()?;
///
/// let report = validator.validate(&Signup { username: None });
///
/// assert!(!report.is_valid());
/// assert_eq!(report.violations().len(), 1);
/// assert_eq!(report.violations()[0].error_message, "username is required");
/// # Ok::<(), warden::builder::BuildError>(())
/// ```
pub struct Validator<S> {
    rules: Vec<RuleBinding<S>>,
}

impl<S> fmt::Debug for Validator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("subject", &type_name::<S>())
            .field("rules", &self.rules)
            .finish()
    }
}

impl<S: 'static> Validator<S> {
    pub(crate) fn new(rules: Vec<RuleBinding<S>>) -> Self {
        tracing::debug!(
            subject = type_name::<S>(),
            rules = rules.len(),
            "validator built"
        );
        Self { rules }
    }

    /// Start declaring rules.
    pub fn builder() -> ValidatorBuilder<S> {
        ValidatorBuilder::new()
    }

    /// Build a validator from a [`Rules`] declaration.
    pub fn from_rules<R>(rules: &R) -> Result<Self, BuildError>
    where
        R: Rules<Subject = S> + ?Sized,
    {
        let mut builder = ValidatorBuilder::new();
        rules.rules(&mut builder)?;
        builder.build()
    }

    /// Evaluate every rule against `subject`.
    ///
    /// Rules run in declaration order and independently: a failing rule never
    /// stops or changes the evaluation of the others.
    pub fn validate(&self, subject: &S) -> ValidationReport {
        let span = tracing::debug_span!(
            "validate",
            subject = type_name::<S>(),
            rules = self.rules.len()
        );
        let _enter = span.enter();

        let checks: Vec<Validation<(), NonEmptyVec<Violation>>> =
            self.rules.iter().map(|rule| rule.evaluate(subject)).collect();

        let violations: Vec<Violation> = match Validation::all_vec(checks) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        };

        for violation in &violations {
            tracing::trace!(
                property = %violation.property_name,
                message = %violation.error_message,
                "rule failed"
            );
        }
        tracing::debug!(violations = violations.len(), "validation finished");

        ValidationReport::new(violations)
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Bound property names, one per rule, in declaration order.
    pub fn property_names(&self) -> Vec<&str> {
        self.rules.iter().map(RuleBinding::property_name).collect()
    }
}
