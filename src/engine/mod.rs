//! Rule evaluation.
//!
//! A [`Validator`] runs every bound rule against a subject and accumulates
//! all failures, using Stillwater's `Validation`, into a [`ValidationReport`].
//! Nothing stops at the first error.

mod binding;
mod report;
mod validator;

pub use binding::RuleBinding;
pub use report::{ValidationReport, Violation};
pub use validator::Validator;
