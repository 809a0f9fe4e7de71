//! Error-message templates.
//!
//! Templates are plain strings with `{name}` placeholders. `{val}` resolves to
//! the bound property's name and `{arg1}`, `{arg2}`, ... to the arguments the
//! condition was built with. Parsing happens once, when a rule is declared;
//! rendering is a single pass over the parsed segments, so substituted text is
//! never scanned for placeholders again.

use std::collections::HashMap;

/// Placeholder resolved to the property name.
pub const VALUE_PLACEHOLDER: &str = "val";

/// Name of the placeholder for the `index`-th builder argument (1-based).
pub fn arg_placeholder(index: usize) -> String {
    format!("arg{index}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed error-message template.
///
/// # Example
///
/// ```rust
/// use warden::core::{placeholder_values, MessageTemplate};
///
/// let template = MessageTemplate::parse("{val} must be at most {arg1} characters");
/// let values = placeholder_values("name", &["10".to_string()]);
///
/// assert_eq!(template.render(&values), "name must be at most 10 characters");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<Segment>,
}

impl MessageTemplate {
    /// Parse a template. Brace text that is not `{identifier}` stays literal.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) if is_placeholder_name(&after[..close]) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(after[..close].to_string()));
                    rest = &after[close + 1..];
                }
                _ => {
                    literal.push('{');
                    rest = after;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute placeholders from `values`.
    ///
    /// A placeholder with no entry in `values` is written back verbatim.
    pub fn render(&self, values: &HashMap<String, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

/// Build the substitution map for a property name and its builder arguments.
pub fn placeholder_values(property: &str, args: &[String]) -> HashMap<String, String> {
    let mut values = HashMap::with_capacity(args.len() + 1);
    values.insert(VALUE_PLACEHOLDER.to_string(), property.to_string());
    for (i, arg) in args.iter().enumerate() {
        values.insert(arg_placeholder(i + 1), arg.clone());
    }
    values
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
