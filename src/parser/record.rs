//! Parsed front-matter records.

use std::collections::HashMap;

/// A single front-matter field value.
///
/// Values are either a scalar string or a string sequence written with the
/// bracketed `[a, b, c]` syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    /// The scalar text, if this is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// The sequence elements, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Scalar(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }

    /// An empty scalar or an empty list reads as absent for binding.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

/// Mapping from field name to field value for one document.
///
/// Field order is irrelevant and names are unique; when a key repeats in the
/// source, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value under the same name.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    /// Get a scalar field value. List fields return `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(FieldValue::as_str)
    }

    /// Get a scalar field value, treating the empty string as absent.
    ///
    /// Binders use this so that empty fields leave the static markup alone.
    pub fn get_nonempty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Get a list field value, treating an empty list as absent.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.fields
            .get(key)
            .and_then(FieldValue::as_list)
            .filter(|items| !items.is_empty())
    }

    /// Whether a field is present at all, empty or not.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Whether a field is present with a non-empty value.
    pub fn has_value(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over all fields in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}
