//! Signup Form Validation
//!
//! This example declares a validator for a signup form and prints the
//! report for a few submissions.
//!
//! Key concepts:
//! - Declaring rules once through the `Rules` trait
//! - Default and custom message templates
//! - Collecting every violation instead of stopping at the first
//!
//! Run with: cargo run --example signup_form

use warden::builder::{BuildError, Rules, ValidatorBuilder};
use warden::conditions::{
    has_maximum_length, has_minimum_length, is_between, is_not_null_or_empty, matches,
    MatchOptions,
};
use warden::field;

struct Signup {
    username: Option<String>,
    email: Option<String>,
    age: u8,
}

struct SignupRules;

impl Rules for SignupRules {
    type Subject = Signup;

    fn rules(&self, rules: &mut ValidatorBuilder<Signup>) -> Result<(), BuildError> {
        rules
            .ensure(field!(Signup, username), is_not_null_or_empty())
            .ensure(field!(Signup, username), has_minimum_length(3))
            .ensure(field!(Signup, username), has_maximum_length(16))
            .ensure(
                field!(Signup, email),
                matches(
                    r"^[^@\s]+@[^@\s]+\.[a-z]+$",
                    MatchOptions::case_insensitive(),
                    "{val} must be a valid address",
                )?,
            )
            .ensure(field!(Signup, age), is_between(13, 120)?);
        Ok(())
    }
}

fn main() -> Result<(), BuildError> {
    println!("=== Signup Form Validation Example ===\n");

    let validator = SignupRules.validator()?;
    println!("Declared {} rules on {:?}\n", validator.len(), validator.property_names());

    let submissions = [
        Signup {
            username: Some("ferris".to_string()),
            email: Some("ferris@rust-lang.org".to_string()),
            age: 9,
        },
        Signup {
            username: None,
            email: Some("not-an-email".to_string()),
            age: 30,
        },
        Signup {
            username: Some("crab".to_string()),
            email: Some("crab@ocean.io".to_string()),
            age: 42,
        },
    ];

    for (i, signup) in submissions.iter().enumerate() {
        let report = validator.validate(signup);
        println!("Submission {}:", i + 1);
        if report.is_valid() {
            println!("  valid\n");
            continue;
        }
        for violation in report.violations() {
            println!("  - {}", violation.error_message);
        }
        println!();
    }

    println!("=== Example Complete ===");
    Ok(())
}
