//! # Reference Normalization
//!
//! Zuul allows the same polymorphic shape for `run`, `post-run`, `secrets`,
//! `include-vars`, `roles`, and friends: a bare string, a list of strings,
//! or a list of objects carrying a `name` key. Every consumer normalizes
//! through [`candidate_strings`] before doing anything with the field, so
//! the shape is resolved in exactly one place.

use serde_json::{Map, Value};

/// The closed set of shapes a Zuul reference field may take.
#[derive(Debug, Clone, Copy)]
pub enum RefShape<'a> {
    /// A bare string: `run: playbooks/run.yaml`.
    Scalar(&'a str),
    /// A list of strings and/or object forms.
    Sequence(&'a [Value]),
    /// An object form carrying the reference under `name`.
    Object(&'a Map<String, Value>),
}

impl<'a> RefShape<'a> {
    /// Classify a field value, or `None` for shapes the schema rejects
    /// anyway (numbers, booleans, null).
    pub fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RefShape::Scalar(s)),
            Value::Array(items) => Some(RefShape::Sequence(items)),
            Value::Object(map) => Some(RefShape::Object(map)),
            _ => None,
        }
    }
}

/// Normalize a reference field to its candidate strings.
///
/// Strings pass through; objects contribute their `name`; sequences
/// flatten one level of either. Objects without a string `name` contribute
/// nothing.
pub fn candidate_strings(value: &Value) -> Vec<&str> {
    match RefShape::of(value) {
        Some(RefShape::Scalar(s)) => vec![s],
        Some(RefShape::Object(map)) => object_name(map).into_iter().collect(),
        Some(RefShape::Sequence(items)) => items
            .iter()
            .flat_map(|item| match RefShape::of(item) {
                Some(RefShape::Scalar(s)) => vec![s],
                Some(RefShape::Object(map)) => object_name(map).into_iter().collect(),
                _ => Vec::new(),
            })
            .collect(),
        None => Vec::new(),
    }
}

/// Normalize a playbook field to its object-form entries.
///
/// A bare object yields itself; a sequence yields its object entries.
/// String entries carry no attributes and contribute nothing.
pub fn object_entries(value: &Value) -> Vec<&Map<String, Value>> {
    match RefShape::of(value) {
        Some(RefShape::Object(map)) => vec![map],
        Some(RefShape::Sequence(items)) => items
            .iter()
            .filter_map(|item| match RefShape::of(item) {
                Some(RefShape::Object(map)) => Some(map),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn object_name(map: &Map<String, Value>) -> Option<&str> {
    map.get("name").and_then(Value::as_str)
}
