//! Rule declaration errors.

use thiserror::Error;

/// Programmer errors found while declaring rules.
///
/// These surface from `build()` or from a fallible condition builder, never
/// from validating a subject.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Property name {name:?} is not a member path. Use field!(Subject, member) or a dotted identifier")]
    InvalidPropertyName { name: String },

    #[error("Message for {property} uses {{{placeholder}}}, which has no value")]
    UnknownPlaceholder {
        property: String,
        placeholder: String,
    },

    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: String, max: String },
}
