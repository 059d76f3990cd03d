//! Document types for the search admin console.
//!
//! This module defines the document structure that is written to and read
//! back from the search engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A scalar field value stored in a document.
///
/// Documents are flat mappings from field name to scalar value. The variant
/// set deliberately covers only what the search engine hands back for plain
/// JSON scalars; nested arrays and objects are rejected at the conversion
/// boundary.
///
/// Serialization is untagged, so a document body serializes to plain JSON:
/// `{"item": "Laptop", "price": 1200, "in_stock": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag.
    Bool(bool),
    /// Integral number. Preferred over `Float` when the value has no
    /// fractional part.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    Text(String),
}

impl FieldValue {
    /// Convert a JSON value into a scalar field value.
    ///
    /// Returns `None` for arrays, objects and null, which have no scalar
    /// representation in this model.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Integer(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Convert this field value into its JSON representation.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => Value::from(*b),
            Self::Integer(i) => Value::from(*i),
            Self::Float(f) => Value::from(*f),
            Self::Text(s) => Value::from(s.clone()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A single record stored under a unique identifier within an index.
///
/// The identifier is externally assigned and acts as the storage key; it is
/// carried alongside the body rather than inside it. Fields are kept in an
/// ordered map so output and comparisons are deterministic.
///
/// # Example
///
/// ```
/// use search_admin_shared::Document;
///
/// let doc = Document::new("dummy_1")
///     .with_field("item", "Laptop")
///     .with_field("price", 1200i64)
///     .with_field("in_stock", true);
///
/// assert_eq!(doc.id, "dummy_1");
/// assert!(doc.field("price").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The externally assigned document identifier, unique within an index.
    pub id: String,
    /// Ordered mapping from field name to scalar value.
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Create an empty document with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the document, returning the document for chaining.
    ///
    /// A repeated field name replaces the earlier value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Serialize the document body (fields only, no identifier) for an
    /// index request.
    pub fn to_source(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.to_json());
        }
        Value::Object(map)
    }

    /// Rebuild a document from an identifier and a `_source` body returned
    /// by the search engine.
    ///
    /// Returns `None` when the body is not an object or contains a
    /// non-scalar field.
    pub fn from_source(id: impl Into<String>, source: &Value) -> Option<Self> {
        let object = source.as_object()?;
        let mut fields = BTreeMap::new();
        for (name, value) in object {
            fields.insert(name.clone(), FieldValue::from_json(value)?);
        }
        Some(Self {
            id: id.into(),
            fields,
        })
    }
}
