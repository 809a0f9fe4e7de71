//! Conditions over text.
//!
//! Text builders accept any [`TextValue`], so the same condition works for a
//! required `String` and for an optional `Option<String>`. Absent text counts
//! as empty for length checks and never matches a pattern.

use crate::builder::BuildError;
use crate::core::{Condition, TemplateArg};
use regex::{Regex, RegexBuilder};

/// A property that holds text which may be absent.
pub trait TextValue {
    fn as_text(&self) -> Option<&str>;
}

impl TextValue for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextValue for &str {
    fn as_text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl TextValue for Option<String> {
    fn as_text(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl TextValue for Option<&str> {
    fn as_text(&self) -> Option<&str> {
        *self
    }
}

/// How two strings are compared for equality.
///
/// Only ordinal modes exist. Culture-aware comparison needs locale data this
/// crate does not carry, so case-insensitive matching uses the Unicode
/// lowercase mapping regardless of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringComparison {
    /// Exact, case-sensitive comparison.
    #[default]
    Ordinal,

    /// Case-insensitive comparison using Unicode lowercase mapping.
    OrdinalIgnoreCase,
}

impl StringComparison {
    pub fn equals(self, left: &str, right: &str) -> bool {
        match self {
            Self::Ordinal => left == right,
            Self::OrdinalIgnoreCase => left
                .chars()
                .flat_map(char::to_lowercase)
                .eq(right.chars().flat_map(char::to_lowercase)),
        }
    }
}

/// Regex flags for [`matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

impl MatchOptions {
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }
}

fn char_len<T: TextValue>(value: &T) -> usize {
    value.as_text().map_or(0, |s| s.chars().count())
}

/// Text must be present and non-empty.
pub fn is_not_null_or_empty<T>() -> Condition<T>
where
    T: TextValue + 'static,
{
    Condition::new(
        |value: &T| value.as_text().is_some_and(|s| !s.is_empty()),
        "{val} is required",
    )
}

/// Text must be absent or empty. Exact negation of [`is_not_null_or_empty`].
pub fn is_null_or_empty<T>() -> Condition<T>
where
    T: TextValue + 'static,
{
    Condition::new(
        |value: &T| value.as_text().map_or(true, str::is_empty),
        "{val} must not have a value",
    )
}

/// At most `max` characters; absent text has length 0.
pub fn has_maximum_length<T>(max: usize) -> Condition<T>
where
    T: TextValue + 'static,
{
    Condition::new(
        move |value: &T| char_len(value) <= max,
        "{val} must be at most {arg1} characters",
    )
    .with_args(vec![max.to_arg()])
}

/// At least `min` characters; absent text has length 0.
pub fn has_minimum_length<T>(min: usize) -> Condition<T>
where
    T: TextValue + 'static,
{
    Condition::new(
        move |value: &T| char_len(value) >= min,
        "{val} must be at least {arg1} characters",
    )
    .with_args(vec![min.to_arg()])
}

/// Between `min` and `max` characters inclusive.
///
/// Fails with [`BuildError::InvalidRange`] when `min > max`.
pub fn has_length_between<T>(min: usize, max: usize) -> Result<Condition<T>, BuildError>
where
    T: TextValue + 'static,
{
    if min > max {
        return Err(BuildError::InvalidRange {
            min: min.to_arg(),
            max: max.to_arg(),
        });
    }

    Ok(Condition::new(
        move |value: &T| (min..=max).contains(&char_len(value)),
        "{val} must be between {arg1} and {arg2} characters",
    )
    .with_args(vec![min.to_arg(), max.to_arg()]))
}

/// Text must equal `expected` under `comparison`. Absent equals absent.
pub fn is_equal_to_using<T>(expected: T, comparison: StringComparison) -> Condition<T>
where
    T: TextValue + TemplateArg + Send + Sync + 'static,
{
    let arg = expected.to_arg();
    Condition::new(
        move |value: &T| match (value.as_text(), expected.as_text()) {
            (None, None) => true,
            (Some(left), Some(right)) => comparison.equals(left, right),
            _ => false,
        },
        "{val} must be the same as {arg1}",
    )
    .with_args(vec![arg])
}

/// Text must contain a match for `pattern`. Absent text never matches.
///
/// The pattern is compiled here, so a malformed pattern fails at declaration
/// time with [`BuildError::InvalidPattern`].
///
/// ```rust
/// use warden::conditions::{matches, MatchOptions};
///
/// let zip = matches::<String>(r"^\d{5}$", MatchOptions::default(), "{val} is not a ZIP code")?;
///
/// assert!(zip.check(&"12345".to_string()));
/// assert!(!zip.check(&"1234".to_string()));
/// # Ok::<(), warden::builder::BuildError>(())
/// ```
pub fn matches<T>(
    pattern: &str,
    options: MatchOptions,
    message: impl Into<String>,
) -> Result<Condition<T>, BuildError>
where
    T: TextValue + 'static,
{
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(options.case_insensitive)
        .multi_line(options.multi_line)
        .dot_matches_new_line(options.dot_matches_new_line)
        .ignore_whitespace(options.ignore_whitespace)
        .build()
        .map_err(|source| BuildError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

    Ok(matches_regex(regex, message))
}

/// [`matches`] with default [`MatchOptions`].
///
/// ```rust
/// use warden::conditions::matches_pattern;
///
/// let slug = matches_pattern::<&str>("^[a-z0-9-]+$", "{val} must be a slug")?;
///
/// assert!(slug.check(&"hello-world"));
/// assert!(!slug.check(&"Hello World"));
/// # Ok::<(), warden::builder::BuildError>(())
/// ```
pub fn matches_pattern<T>(
    pattern: &str,
    message: impl Into<String>,
) -> Result<Condition<T>, BuildError>
where
    T: TextValue + 'static,
{
    matches(pattern, MatchOptions::default(), message)
}

/// Like [`matches`] with an already compiled regex.
pub fn matches_regex<T>(regex: Regex, message: impl Into<String>) -> Condition<T>
where
    T: TextValue + 'static,
{
    let arg = regex.as_str().to_string();
    Condition::new(
        move |value: &T| value.as_text().is_some_and(|s| regex.is_match(s)),
        message,
    )
    .with_args(vec![arg])
}
