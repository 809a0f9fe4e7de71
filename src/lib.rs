//! Warden: a declarative validation engine
//!
//! Invariants such as "value <= 4", "name is required" or "code matches a
//! pattern" are declared once as pure, reusable conditions, bound to named
//! properties, and evaluated together into a structured report.
//!
//! # Core Concepts
//!
//! - **Condition**: a pure predicate paired with an error-message template
//! - **Field**: a property accessor that carries the property's name
//! - **Validator**: an immutable, ordered set of rule bindings
//! - **ValidationReport**: every violation found, in declaration order
//!
//! Templates use `{val}` for the property name and `{arg1}`, `{arg2}`, ... for
//! the arguments a condition was built with.
//!
//! # Example
//!
//! ```rust
//! use warden::builder::{BuildError, Rules, ValidatorBuilder};
//! use warden::conditions::{
//!     has_maximum_length, is_less_than_or_equal_to, is_not_null_or_empty,
//! };
//! use warden::field;
//!
//! struct Order {
//!     quantity: u32,
//!     reference: Option<String>,
//! }
//!
//! struct OrderRules;
//!
//! impl Rules for OrderRules {
//!     type Subject = Order;
//!
//!     fn rules(&self, rules: &mut ValidatorBuilder<Order>) -> Result<(), BuildError> {
//!         rules
//!             .ensure(field!(Order, quantity), is_less_than_or_equal_to(4))
//!             .ensure(field!(Order, reference), is_not_null_or_empty())
//!             .ensure(field!(Order, reference), has_maximum_length(8));
//!         Ok(())
//!     }
//! }
//!
//! let validator = OrderRules.validator()?;
//! let report = validator.validate(&Order {
//!     quantity: 9,
//!     reference: Some("A-1".to_string()),
//! });
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.violations().len(), 1);
//! assert_eq!(
//!     report.violations()[0].error_message,
//!     "quantity must be less than or equal to 4"
//! );
//! # Ok::<(), BuildError>(())
//! ```

pub mod builder;
pub mod conditions;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, Rules, ValidatorBuilder};
pub use crate::core::{Condition, Field};
pub use engine::{ValidationReport, Validator, Violation};
