//! Macros for rule declaration.

/// Build a [`Field`](crate::core::Field) whose name is the member path.
///
/// The name is taken from the tokens of the path, so it is known without
/// reading the property. Only member paths are accepted; computed expressions
/// are rejected at compile time.
///
/// # Example
///
/// ```
/// use warden::field;
///
/// struct Address {
///     city: String,
/// }
///
/// struct Customer {
///     age: u32,
///     address: Address,
/// }
///
/// let age = field!(Customer, age);
/// let city = field!(Customer, address.city);
///
/// assert_eq!(age.name(), "age");
/// assert_eq!(city.name(), "address.city");
/// ```
#[macro_export]
macro_rules! field {
    ($subject:ty, $first:ident $(. $rest:ident)*) => {
        $crate::core::Field::new(
            [stringify!($first) $(, stringify!($rest))*].join("."),
            |subject: &$subject| &subject.$first $(.$rest)*,
        )
    };
}

#[cfg(test)]
mod tests {
    struct Inner {
        code: u16,
    }

    struct Outer {
        label: String,
        inner: Inner,
    }

    #[test]
    fn field_macro_captures_member_name() {
        let subject = Outer {
            label: "x".to_string(),
            inner: Inner { code: 7 },
        };

        let label = field!(Outer, label);
        let code = field!(Outer, inner.code);

        assert_eq!(label.name(), "label");
        assert_eq!(label.get(&subject), "x");
        assert_eq!(code.name(), "inner.code");
        assert_eq!(*code.get(&subject), 7);
    }
}
