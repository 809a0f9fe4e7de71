//! Conditions: pure predicates paired with an error-message template.
//!
//! A condition never refers to a subject. It is evaluated only when a
//! validator runs, so the same condition can be reused across any number of
//! subjects and validators.

use super::template::{arg_placeholder, MessageTemplate, VALUE_PLACEHOLDER};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Pure predicate over a value plus the message reported when it fails.
///
/// # Example
///
/// ```rust
/// use warden::core::Condition;
///
/// let even = Condition::new(|n: &i32| n % 2 == 0, "{val} must be even");
///
/// assert!(even.check(&4));
/// assert!(!even.check(&3));
/// assert_eq!(even.template(), "{val} must be even");
/// ```
pub struct Condition<T> {
    predicate: Predicate<T>,
    template: String,
    args: Vec<String>,
}

impl<T> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            template: self.template.clone(),
            args: self.args.clone(),
        }
    }
}

impl<T> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("template", &self.template)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Condition<T> {
    /// Create a condition from a pure predicate and a message template.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F, template: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Condition {
            predicate: Arc::new(predicate),
            template: template.into(),
            args: Vec::new(),
        }
    }

    /// Attach the stringified builder arguments backing `{arg1}`, `{arg2}`, ...
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Replace the message template, keeping predicate and arguments.
    ///
    /// ```rust
    /// use warden::conditions::has_maximum_length;
    ///
    /// let short = has_maximum_length::<String>(8).with_message("Keep it under {arg1}");
    /// assert_eq!(short.template(), "Keep it under {arg1}");
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.template = message.into();
        self
    }

    /// Evaluate the predicate against a value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// The unresolved message template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Stringified builder arguments, in declaration order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Both conditions must hold.
    ///
    /// The combined template is `"<left> and <right>"`; the right-hand
    /// template's `{argN}` placeholders are renumbered after the left-hand
    /// arguments so each still resolves to its own value.
    ///
    /// ```rust
    /// use warden::conditions::{is_greater_than, is_less_than};
    ///
    /// let in_range = is_greater_than(0).and(is_less_than(10));
    ///
    /// assert!(in_range.check(&5));
    /// assert!(!in_range.check(&10));
    /// assert_eq!(
    ///     in_range.template(),
    ///     "{val} must be greater than {arg1} and {val} must be less than {arg2}"
    /// );
    /// ```
    pub fn and(self, other: Condition<T>) -> Self {
        let (left, right) = (self.predicate, other.predicate.clone());
        Self::join(
            self.template,
            self.args,
            other,
            " and ",
            Arc::new(move |value: &T| left(value) && right(value)),
        )
    }

    /// Either condition must hold. The template is joined with `" or "`.
    pub fn or(self, other: Condition<T>) -> Self {
        let (left, right) = (self.predicate, other.predicate.clone());
        Self::join(
            self.template,
            self.args,
            other,
            " or ",
            Arc::new(move |value: &T| left(value) || right(value)),
        )
    }

    /// Invert the predicate. A negated check needs its own message.
    pub fn negate(self, message: impl Into<String>) -> Self {
        let inner = self.predicate;
        Condition {
            predicate: Arc::new(move |value: &T| !inner(value)),
            template: message.into(),
            args: self.args,
        }
    }

    fn join(
        template: String,
        mut args: Vec<String>,
        other: Condition<T>,
        separator: &str,
        predicate: Predicate<T>,
    ) -> Self {
        let offset = args.len();
        let total = offset + other.args.len();
        let left = renumber_args(&template, offset, 0, total);
        let right = renumber_args(&other.template, other.args.len(), offset, total);
        args.extend(other.args);

        Condition {
            predicate,
            template: format!("{left}{separator}{right}"),
            args,
        }
    }
}

/// Rewrite the `{argN}` placeholders of a template whose `len` arguments are
/// moved `shift` places along a combined list of `total`.
///
/// A placeholder with no argument of its own is pushed past `total`, so it
/// stays unresolved in the combined template too.
fn renumber_args(template: &str, len: usize, shift: usize, total: usize) -> String {
    let parsed = MessageTemplate::parse(template);
    let mut mapping = HashMap::new();

    for name in parsed.placeholders() {
        if name == VALUE_PLACEHOLDER {
            continue;
        }
        let Some(index) = name.strip_prefix("arg").and_then(|n| n.parse::<usize>().ok()) else {
            continue;
        };
        if arg_placeholder(index) != name {
            continue;
        }
        let renumbered = if (1..=len).contains(&index) {
            index + shift
        } else {
            total + index + 1
        };
        mapping.insert(
            name.to_string(),
            format!("{{{}}}", arg_placeholder(renumbered)),
        );
    }

    parsed.render(&mapping)
}
