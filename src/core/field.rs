//! Named property accessors.

use std::fmt;
use std::sync::Arc;

type Accessor<S, P> = Arc<dyn Fn(&S) -> &P + Send + Sync>;

/// A property of subject `S` of type `P`, together with the name used in
/// error messages.
///
/// The name is fixed when the field is created and never derived from
/// evaluating the accessor. The [`field!`](crate::field) macro captures it
/// from the member path itself.
///
/// # Example
///
/// ```rust
/// use warden::core::Field;
///
/// struct Account {
///     email: String,
/// }
///
/// let email = Field::new("email", |a: &Account| &a.email);
/// let account = Account { email: "a@b.c".to_string() };
///
/// assert_eq!(email.name(), "email");
/// assert_eq!(email.get(&account), "a@b.c");
/// ```
pub struct Field<S, P> {
    name: String,
    accessor: Accessor<S, P>,
}

impl<S, P> Clone for Field<S, P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<S, P> fmt::Debug for Field<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<S: 'static, P: 'static> Field<S, P> {
    pub fn new<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&S) -> &P + Send + Sync + 'static,
    {
        Field {
            name: name.into(),
            accessor: Arc::new(accessor),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the property from a subject.
    pub fn get<'a>(&self, subject: &'a S) -> &'a P {
        (self.accessor)(subject)
    }
}

/// Whether `name` is a dotted identifier path such as `value` or
/// `address.city`.
pub(crate) fn is_property_path(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Address {
        city: String,
    }

    struct Person {
        age: u32,
        address: Address,
    }

    fn person() -> Person {
        Person {
            age: 42,
            address: Address {
                city: "Lisbon".to_string(),
            },
        }
    }

    #[test]
    fn field_reads_property() {
        let age = Field::new("age", |p: &Person| &p.age);

        assert_eq!(*age.get(&person()), 42);
        assert_eq!(age.name(), "age");
    }

    #[test]
    fn field_reads_nested_property() {
        let city = Field::new("address.city", |p: &Person| &p.address.city);

        assert_eq!(city.get(&person()), "Lisbon");
    }

    #[test]
    fn property_paths_are_identifiers() {
        assert!(is_property_path("value"));
        assert!(is_property_path("_private"));
        assert!(is_property_path("address.city"));
        assert!(is_property_path("line2"));

        assert!(!is_property_path(""));
        assert!(!is_property_path("2fast"));
        assert!(!is_property_path("a + b"));
        assert!(!is_property_path("address."));
        assert!(!is_property_path(".city"));
        assert!(!is_property_path("len()"));
    }
}
