//! Core validation types.
//!
//! This module contains the pure building blocks every rule is made of:
//! - `Condition`: a reusable predicate with a message template
//! - `Field`: a property accessor carrying the property's name
//! - `MessageTemplate`: placeholder parsing and substitution
//! - `TemplateArg`: textual form of builder arguments
//!
//! Nothing here refers to a concrete subject or performs side effects.

mod arg;
mod condition;
mod field;
mod template;

pub use arg::TemplateArg;
pub use condition::Condition;
pub use field::Field;
pub use template::{arg_placeholder, placeholder_values, MessageTemplate, VALUE_PLACEHOLDER};

pub(crate) use field::is_property_path;
