//! Serialization utilities
//!
//! This module converts tag values to and from `serde_json::Value`.

use crate::errors::TypeMappingError;
use crate::tag_map::TagMap;
use crate::types::TagValue;
use serde_json::{Map, Number, Value};

impl TagValue {
    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            TagValue::Text(s) => Value::String(s.clone()),
            TagValue::Boolean(b) => Value::Bool(*b),
            TagValue::BigInt(i) => Value::Number((*i).into()),
            TagValue::Float(f) => float_to_json(*f),
            TagValue::TextList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            TagValue::BooleanList(items) => {
                Value::Array(items.iter().copied().map(Value::Bool).collect())
            }
            TagValue::BigIntList(items) => {
                Value::Array(items.iter().map(|i| Value::Number((*i).into())).collect())
            }
            TagValue::FloatList(items) => {
                Value::Array(items.iter().copied().map(float_to_json).collect())
            }
        }
    }

    /// Convert from a JSON value
    ///
    /// Integers become `BigInt`, every other number becomes `Float`. Arrays
    /// must be non-empty and homogeneous; an array mixing integers and floats
    /// is read as a float list.
    pub fn from_json(value: &Value) -> Result<Self, TypeMappingError> {
        match value {
            Value::String(s) => Ok(TagValue::Text(s.clone())),
            Value::Bool(b) => Ok(TagValue::Boolean(*b)),
            Value::Number(n) => Ok(number_to_tag(n)),
            Value::Array(items) => array_to_tag(items),
            Value::Null => Err(TypeMappingError::UnsupportedJson("null".to_string())),
            Value::Object(_) => Err(TypeMappingError::UnsupportedJson("object".to_string())),
        }
    }
}

/// Build a tag map from a JSON object
///
/// Entries whose value has no [`TagValue`] representation are skipped; their
/// keys are returned alongside the map.
pub fn tag_map_from_json(object: &Map<String, Value>) -> (TagMap, Vec<String>) {
    let mut map = TagMap::new();
    let mut skipped = Vec::new();

    for (key, value) in object {
        match TagValue::from_json(value) {
            Ok(tag) => map.insert(key.clone(), tag),
            Err(_) => skipped.push(key.clone()),
        }
    }

    (map, skipped)
}

/// Convert a tag map to a JSON object
pub fn tag_map_to_json(map: &TagMap) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect()
}

fn float_to_json(f: f64) -> Value {
    // NaN and infinities have no JSON form
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

fn number_to_tag(n: &Number) -> TagValue {
    match n.as_i64() {
        Some(i) => TagValue::BigInt(i),
        None => TagValue::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn array_to_tag(items: &[Value]) -> Result<TagValue, TypeMappingError> {
    let first = items
        .first()
        .ok_or_else(|| TypeMappingError::UnsupportedJson("empty array".to_string()))?;

    let mixed = || TypeMappingError::UnsupportedJson("mixed array".to_string());

    match first {
        Value::String(_) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(TagValue::TextList)
            .ok_or_else(mixed),
        Value::Bool(_) => items
            .iter()
            .map(Value::as_bool)
            .collect::<Option<Vec<_>>>()
            .map(TagValue::BooleanList)
            .ok_or_else(mixed),
        Value::Number(_) => {
            if let Some(ints) = items.iter().map(Value::as_i64).collect::<Option<Vec<_>>>() {
                Ok(TagValue::BigIntList(ints))
            } else {
                items
                    .iter()
                    .map(Value::as_f64)
                    .collect::<Option<Vec<_>>>()
                    .map(TagValue::FloatList)
                    .ok_or_else(mixed)
            }
        }
        Value::Null => Err(TypeMappingError::UnsupportedJson("array of null".to_string())),
        Value::Array(_) => Err(TypeMappingError::UnsupportedJson("nested array".to_string())),
        Value::Object(_) => Err(TypeMappingError::UnsupportedJson("array of objects".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_from_json() {
        assert_eq!(TagValue::from_json(&json!("x")).unwrap(), TagValue::Text("x".into()));
        assert_eq!(TagValue::from_json(&json!(true)).unwrap(), TagValue::Boolean(true));
        assert_eq!(TagValue::from_json(&json!(7)).unwrap(), TagValue::BigInt(7));
        assert_eq!(TagValue::from_json(&json!(-7)).unwrap(), TagValue::BigInt(-7));
        assert_eq!(TagValue::from_json(&json!(2.5)).unwrap(), TagValue::Float(2.5));
    }

    #[test]
    fn test_lists_from_json() {
        assert_eq!(
            TagValue::from_json(&json!(["a", "b"])).unwrap(),
            TagValue::TextList(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            TagValue::from_json(&json!([1, 2])).unwrap(),
            TagValue::BigIntList(vec![1, 2])
        );
        assert_eq!(
            TagValue::from_json(&json!([1, 2.5])).unwrap(),
            TagValue::FloatList(vec![1.0, 2.5])
        );
        assert_eq!(
            TagValue::from_json(&json!([false])).unwrap(),
            TagValue::BooleanList(vec![false])
        );
    }

    #[test]
    fn test_unsupported_json() {
        assert!(TagValue::from_json(&json!(null)).is_err());
        assert!(TagValue::from_json(&json!({"a": 1})).is_err());
        assert!(TagValue::from_json(&json!([])).is_err());
        assert!(TagValue::from_json(&json!([1, "a"])).is_err());
        assert!(TagValue::from_json(&json!([[1]])).is_err());
    }

    #[test]
    fn test_tag_map_from_json_skips_unsupported() {
        let object = json!({
            "status": "open",
            "ids": [1, 2, 3],
            "nested": {"a": 1},
            "nothing": null
        });

        let (map, mut skipped) = tag_map_from_json(object.as_object().unwrap());
        skipped.sort();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get_or("status", ""), ("open", true));
        assert_eq!(skipped, vec!["nested".to_string(), "nothing".to_string()]);
    }

    #[test]
    fn test_to_json() {
        assert_eq!(TagValue::BigIntList(vec![1, 2]).to_json(), json!([1, 2]));
        assert_eq!(TagValue::Float(0.5).to_json(), json!(0.5));
        assert_eq!(TagValue::Float(f64::NAN).to_json(), json!(null));
        assert_eq!(TagValue::Text("a".into()).to_json(), json!("a"));
    }
}
