//! Untyped configuration values
//!
//! [`Value`] is both the literal and the resolved result of
//! [`EnvAny`](crate::EnvAny). A document binds it from any structure; a
//! variable supplies it as JSON text.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const PREVIEW_LEN: usize = 50;

/// A structured configuration value of no fixed shape.
///
/// Whole numbers that fit in an `i64` decode as [`Value::Integer`]; larger
/// ones decode as [`Value::Float`] and may lose precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// Decode the JSON text held by a variable
    pub fn from_json(raw: &str) -> Result<Value> {
        serde_json::from_str(raw).map_err(|e| {
            Error::decode_failed(
                format!("Invalid JSON at line {}, column {}: {}", e.line(), e.column(), e),
                truncate_str(raw, PREVIEW_LEN),
            )
        })
    }

    /// Look up a key when this is a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(m) => m.get(key),
            _ => None,
        }
    }

    /// The integer, if this is one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The string, if this is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

// Keeps error output readable when a variable holds a large document
fn truncate_str(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
