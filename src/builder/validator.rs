//! Builder for declaring a validator's rules.

use crate::builder::error::BuildError;
use crate::core::{Condition, Field};
use crate::engine::{RuleBinding, Validator};

/// A set of rule declarations for one subject type.
///
/// Implement this for a type that describes how `Subject` is validated, then
/// call [`Rules::validator`] once and reuse the result.
///
/// # Example
///
/// ```rust
/// use warden::builder::{BuildError, Rules, ValidatorBuilder};
/// use warden::conditions::is_less_than_or_equal_to;
/// use warden::field;
///
/// struct Sample {
///     value: i32,
/// }
///
/// struct SampleRules;
///
/// impl Rules for SampleRules {
///     type Subject = Sample;
///
///     fn rules(&self, rules: &mut ValidatorBuilder<Sample>) -> Result<(), BuildError> {
///         rules.ensure(field!(Sample, value), is_less_than_or_equal_to(4));
///         Ok(())
///     }
/// }
///
/// let validator = SampleRules.validator()?;
/// let report = validator.validate(&Sample { value: 8 });
///
/// assert!(!report.is_valid());
/// assert_eq!(
///     report.violations()[0].error_message,
///     "value must be less than or equal to 4"
/// );
/// # Ok::<(), BuildError>(())
/// ```
pub trait Rules {
    type Subject: 'static;

    /// Declare every rule, in evaluation order.
    fn rules(&self, rules: &mut ValidatorBuilder<Self::Subject>) -> Result<(), BuildError>;

    /// Collect the declared rules into a validator.
    fn validator(&self) -> Result<Validator<Self::Subject>, BuildError> {
        Validator::from_rules(self)
    }
}

/// Collects rule bindings, then produces an immutable [`Validator`].
///
/// Declaration faults are remembered and reported by [`build`](Self::build);
/// the first one wins.
pub struct ValidatorBuilder<S> {
    rules: Vec<RuleBinding<S>>,
    error: Option<BuildError>,
}

impl<S: 'static> ValidatorBuilder<S> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            error: None,
        }
    }

    /// Bind `condition` to the property read by `field`.
    pub fn ensure<P: 'static>(
        &mut self,
        field: Field<S, P>,
        condition: Condition<P>,
    ) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        match RuleBinding::bind(field, condition) {
            Ok(binding) => self.rules.push(binding),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Owned form of [`ensure`](Self::ensure) for chained construction.
    pub fn rule<P: 'static>(mut self, field: Field<S, P>, condition: Condition<P>) -> Self {
        self.ensure(field, condition);
        self
    }

    /// Build the validator.
    pub fn build(self) -> Result<Validator<S>, BuildError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Validator::new(self.rules)),
        }
    }
}

impl<S: 'static> Default for ValidatorBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
