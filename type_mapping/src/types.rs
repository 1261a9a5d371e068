//! Type mapping definitions
//!
//! This module provides the closed set of value kinds a pagination tag or
//! meta entry can hold, and conversions from the matching Rust types.

use serde::Serialize;

/// Dynamically typed tag/meta value
///
/// Each variant is a distinct kind. Accessors match on the exact variant and
/// never coerce between kinds, so a `Float(3.0)` is not readable as an integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Text(String),
    Boolean(bool),
    BigInt(i64),
    Float(f64),
    TextList(Vec<String>),
    BooleanList(Vec<bool>),
    BigIntList(Vec<i64>),
    FloatList(Vec<f64>),
}

impl TagValue {
    /// Short name of the stored kind, used in log output
    pub fn kind_name(&self) -> &'static str {
        match self {
            TagValue::Text(_) => "string",
            TagValue::Boolean(_) => "bool",
            TagValue::BigInt(_) => "int64",
            TagValue::Float(_) => "float64",
            TagValue::TextList(_) => "[]string",
            TagValue::BooleanList(_) => "[]bool",
            TagValue::BigIntList(_) => "[]int64",
            TagValue::FloatList(_) => "[]float64",
        }
    }

    /// Whether this value is one of the sequence kinds
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            TagValue::TextList(_)
                | TagValue::BooleanList(_)
                | TagValue::BigIntList(_)
                | TagValue::FloatList(_)
        )
    }
}

impl From<String> for TagValue {
    fn from(val: String) -> Self {
        TagValue::Text(val)
    }
}

impl From<&str> for TagValue {
    fn from(val: &str) -> Self {
        TagValue::Text(val.to_string())
    }
}

impl From<bool> for TagValue {
    fn from(val: bool) -> Self {
        TagValue::Boolean(val)
    }
}

impl From<i64> for TagValue {
    fn from(val: i64) -> Self {
        TagValue::BigInt(val)
    }
}

impl From<i32> for TagValue {
    fn from(val: i32) -> Self {
        TagValue::BigInt(val as i64)
    }
}

impl From<f64> for TagValue {
    fn from(val: f64) -> Self {
        TagValue::Float(val)
    }
}

impl From<Vec<String>> for TagValue {
    fn from(val: Vec<String>) -> Self {
        TagValue::TextList(val)
    }
}

impl From<Vec<&str>> for TagValue {
    fn from(val: Vec<&str>) -> Self {
        TagValue::TextList(val.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<bool>> for TagValue {
    fn from(val: Vec<bool>) -> Self {
        TagValue::BooleanList(val)
    }
}

impl From<Vec<i64>> for TagValue {
    fn from(val: Vec<i64>) -> Self {
        TagValue::BigIntList(val)
    }
}

impl From<Vec<f64>> for TagValue {
    fn from(val: Vec<f64>) -> Self {
        TagValue::FloatList(val)
    }
}
