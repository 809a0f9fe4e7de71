//! Builder API for declaring validators.
//!
//! Rules are declared through [`ValidatorBuilder::ensure`], either directly
//! or from a [`Rules`] implementation, and frozen into a
//! [`Validator`](crate::engine::Validator) by `build()`.

pub mod error;
pub mod macros;
pub mod validator;

pub use error::BuildError;
pub use validator::{Rules, ValidatorBuilder};
