//! Rule bindings: a condition attached to a named property.

use crate::builder::BuildError;
use crate::core::{is_property_path, placeholder_values, Condition, Field, MessageTemplate};
use crate::engine::report::Violation;
use std::collections::HashMap;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Evaluate<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;

/// A subject-level check produced by binding a `Condition<P>` to a
/// `Field<S, P>`.
///
/// Everything except the predicate result is fixed at declaration time: the
/// property name is validated, the template parsed, and the placeholder values
/// resolved.
pub struct RuleBinding<S> {
    property_name: String,
    template: MessageTemplate,
    values: HashMap<String, String>,
    evaluate: Evaluate<S>,
}

impl<S> fmt::Debug for RuleBinding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBinding")
            .field("property_name", &self.property_name)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl<S: 'static> RuleBinding<S> {
    pub fn bind<P: 'static>(field: Field<S, P>, condition: Condition<P>) -> Result<Self, BuildError> {
        let property_name = field.name().to_string();
        if !is_property_path(&property_name) {
            return Err(BuildError::InvalidPropertyName {
                name: property_name,
            });
        }

        let template = MessageTemplate::parse(condition.template());
        let values = placeholder_values(&property_name, condition.args());
        if let Some(unknown) = template.placeholders().find(|name| !values.contains_key(*name)) {
            return Err(BuildError::UnknownPlaceholder {
                property: property_name,
                placeholder: unknown.to_string(),
            });
        }

        Ok(RuleBinding {
            property_name,
            template,
            values,
            evaluate: Box::new(move |subject: &S| condition.check(field.get(subject))),
        })
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Evaluate against a subject, producing the resolved violation on failure.
    pub fn evaluate(&self, subject: &S) -> Validation<(), NonEmptyVec<Violation>> {
        if (self.evaluate)(subject) {
            Validation::success(())
        } else {
            Validation::fail(Violation {
                property_name: self.property_name.clone(),
                error_message: self.template.render(&self.values),
            })
        }
    }
}
