//! Validation reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One failed rule, with its message fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub property_name: String,
    pub error_message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_name, self.error_message)
    }
}

/// Outcome of validating one subject: every violation, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// True iff no rule failed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations reported against one property.
    pub fn violations_for<'a>(
        &'a self,
        property_name: &'a str,
    ) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.property_name == property_name)
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Convert into an accumulating `Validation` for composition with other
    /// checks.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<Violation>> {
        let checks: Vec<Validation<(), NonEmptyVec<Violation>>> = self
            .violations
            .into_iter()
            .map(|violation| Validation::fail(violation))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(property: &str, message: &str) -> Violation {
        Violation {
            property_name: property.to_string(),
            error_message: message.to_string(),
        }
    }

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::default();

        assert!(report.is_valid());
        assert!(report.violations().is_empty());
        assert!(report.into_validation().is_success());
    }

    #[test]
    fn report_with_violations_is_invalid() {
        let report = ValidationReport::new(vec![
            violation("name", "name is required"),
            violation("age", "age must be less than or equal to 4"),
            violation("name", "name must be at least 3 characters"),
        ]);

        assert!(!report.is_valid());
        assert_eq!(report.violations_for("name").count(), 2);
        assert_eq!(report.violations_for("email").count(), 0);
    }

    #[test]
    fn into_validation_keeps_every_violation() {
        let report = ValidationReport::new(vec![
            violation("a", "first"),
            violation("b", "second"),
        ]);

        match report.into_validation() {
            Validation::Failure(errors) => {
                let messages: Vec<_> = errors.iter().map(|v| v.error_message.as_str()).collect();
                assert_eq!(messages, vec!["first", "second"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn display_lists_violations() {
        let report = ValidationReport::new(vec![
            violation("name", "name is required"),
            violation("age", "age is too high"),
        ]);

        assert_eq!(report.to_string(), "name: name is required\nage: age is too high");
        assert_eq!(ValidationReport::default().to_string(), "valid");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = ValidationReport::new(vec![violation("value", "value is wrong")]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "violations": [
                    { "property_name": "value", "error_message": "value is wrong" }
                ]
            })
        );

        let back: ValidationReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
