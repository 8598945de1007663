//! Dynamic value model that schemas are checked against.
//!
//! [`Value`] mirrors the JSON data model with one addition: a native
//! [`DateTime`] variant, so date-time validators can accept already-parsed
//! timestamps as well as ISO-8601 strings.

use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key/value storage used by [`Value::Object`].
pub type Map = BTreeMap<String, Value>;

/// A dynamically typed value.
///
/// There is no separate "undefined": a key that is absent from an object is
/// undefined, while [`Value::Null`] is an explicit null.
///
/// Numbers are `f64`, so integers beyond 2^53 round to the nearest double.
///
/// With the `serde` feature a `DateTime` serializes as its RFC 3339 string
/// and deserializes back as [`Value::String`]; the mapping is one-way.
///
/// # Examples
///
/// ```
/// use schema_rail::Value;
/// use serde_json::json;
///
/// let value: Value = json!({ "name": "rail", "tags": [1, 2] }).into();
/// assert_eq!(value.type_name(), "object");
/// assert_eq!(value.get("name"), Some(&Value::from("rail")));
/// assert!(value.get("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    DateTime(DateTime<FixedOffset>),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Short lowercase name of the runtime type, used in violation messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::DateTime(_) => "date-time",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a key when `self` is an object. Returns `None` for other types.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            // Without `arbitrary_precision` every JSON number has an f64 form;
            // integers beyond 2^53 round to the nearest double.
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    #[inline]
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    #[inline]
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    #[inline]
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value.fixed_offset())
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Map> for Value {
    #[inline]
    fn from(value: Map) -> Self {
        Self::Object(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}
