//! Typed optional-field access over parsed feed documents.
//!
//! Every feed is a loosely specified JSON document where any field may be
//! missing or carry the wrong type. Instead of deserializing into rigid
//! structs (where one bad field rejects the whole document), models are
//! built by looking fields up with a default, so each mapping is a total
//! function from document to model.

use alloc::vec::Vec;
use serde_json::Value;

use crate::error::FetchError;

/// Parse a raw response body into a document tree.
///
/// This is the only place where a malformed body becomes an error; once a
/// document exists, missing fields only ever produce defaults.
pub fn parse_document(body: &[u8]) -> Result<Value, FetchError> {
    serde_json::from_slice(body).map_err(|_| FetchError::MalformedJson)
}

/// Path-based lookup with default fallback.
pub trait FieldLookup {
    /// Walk a path of object keys, returning `None` as soon as a segment is
    /// missing or the current node is not an object.
    fn at(&self, path: &[&str]) -> Option<&Value>;

    /// Numeric field as `f32`, or `default` when missing or not a number.
    fn f32_or(&self, path: &[&str], default: f32) -> f32 {
        self.at(path)
            .and_then(Value::as_f64)
            .map_or(default, |v| v as f32)
    }

    /// String field, or `default` when missing or not a string.
    fn str_or<'a>(&'a self, path: &[&str], default: &'a str) -> &'a str {
        self.at(path).and_then(Value::as_str).unwrap_or(default)
    }

    /// Optional string field.
    fn str_at(&self, path: &[&str]) -> Option<&str> {
        self.at(path).and_then(Value::as_str)
    }

    /// Truthiness: JSON booleans as-is, numbers are true when non-zero.
    fn bool_or(&self, path: &[&str], default: bool) -> bool {
        match self.at(path) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => default,
        }
    }

    /// Integer field.
    fn i64_at(&self, path: &[&str]) -> Option<i64> {
        self.at(path).and_then(Value::as_i64)
    }

    /// Array field, or an empty slice when missing or not an array.
    fn array_at(&self, path: &[&str]) -> &[Value] {
        self.at(path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Object members as `(key, value)` pairs in document order, empty when
    /// missing or not an object.
    fn entries_at<'a>(&'a self, path: &[&str]) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.at(path)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl FieldLookup for Value {
    fn at(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(self, |node, key| node.as_object()?.get(*key))
    }
}
