//! Attribute value variants and their display coercion.

use serde::{Deserialize, Serialize};

/// A single attribute value.
///
/// The variant set mirrors what the storage engine can hold; `Json` carries
/// module-specific payloads that have no dedicated typed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    /// Seconds since the Unix epoch.
    Timestamp(i64),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Render this value as a display string. Total: every variant has a
    /// string form.
    pub fn display_string(&self) -> String {
        match self {
            AttributeValue::Text(s) => s.clone(),
            AttributeValue::Integer(n) => n.to_string(),
            AttributeValue::Real(x) => x.to_string(),
            AttributeValue::Boolean(b) => b.to_string(),
            AttributeValue::Timestamp(seconds) => seconds.to_string(),
            AttributeValue::Json(value) => value.to_string(),
        }
    }

    /// Borrow the text content, `None` for non-text variants.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(x: f64) -> Self {
        AttributeValue::Real(x)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        AttributeValue::Json(value)
    }
}
