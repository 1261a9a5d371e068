//! Tag map
//!
//! String-keyed storage for [`TagValue`]s with strict, fallback-safe typed reads.

use crate::types::TagValue;
use serde::Serialize;
use std::collections::hash_map::{self, HashMap};

/// Extraction of one exact [`TagValue`] kind
///
/// Implemented for the scalar kinds by value and for the sequence kinds as
/// borrowed slices.
pub trait FromTagValue<'a>: Sized {
    fn from_tag_value(value: &'a TagValue) -> Option<Self>;
}

macro_rules! impl_from_tag_value {
    ($target:ty, $variant:ident, copy) => {
        impl<'a> FromTagValue<'a> for $target {
            fn from_tag_value(value: &'a TagValue) -> Option<Self> {
                match value {
                    TagValue::$variant(v) => Some(*v),
                    _ => None,
                }
            }
        }
    };
    ($target:ty, $variant:ident, borrow) => {
        impl<'a> FromTagValue<'a> for &'a $target {
            fn from_tag_value(value: &'a TagValue) -> Option<Self> {
                match value {
                    TagValue::$variant(v) => Some(v.as_ref()),
                    _ => None,
                }
            }
        }
    };
}

impl_from_tag_value!(bool, Boolean, copy);
impl_from_tag_value!(i64, BigInt, copy);
impl_from_tag_value!(f64, Float, copy);
impl_from_tag_value!(str, Text, borrow);
impl_from_tag_value!([String], TextList, borrow);
impl_from_tag_value!([bool], BooleanList, borrow);
impl_from_tag_value!([i64], BigIntList, borrow);
impl_from_tag_value!([f64], FloatList, borrow);

/// Unordered key/value store used for pagination tags and response meta
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagMap {
    entries: HashMap<String, TagValue>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<TagValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, TagValue> {
        self.entries.iter()
    }

    /// Typed read with fallback
    ///
    /// Returns `(stored, true)` when `key` holds exactly the requested kind,
    /// `(fallback, false)` when it is absent or holds any other kind.
    pub fn get_or<'a, T: FromTagValue<'a>>(&'a self, key: &str, fallback: T) -> (T, bool) {
        match self.entries.get(key).and_then(T::from_tag_value) {
            Some(value) => (value, true),
            None => (fallback, false),
        }
    }

    /// The stored value when it is any sequence kind
    pub fn get_list(&self, key: &str) -> Option<&TagValue> {
        self.entries.get(key).filter(|value| value.is_list())
    }
}

impl FromIterator<(String, TagValue)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (String, TagValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, TagValue>> for TagMap {
    fn from(entries: HashMap<String, TagValue>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for TagMap {
    type Item = (String, TagValue);
    type IntoIter = hash_map::IntoIter<String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagMap {
    type Item = (&'a String, &'a TagValue);
    type IntoIter = hash_map::Iter<'a, String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TagMap {
        let mut map = TagMap::new();
        map.insert("name", "alice");
        map.insert("active", true);
        map.insert("age", 42i64);
        map.insert("score", 3.0f64);
        map.insert("roles", vec!["admin", "editor"]);
        map.insert("flags", vec![true, false]);
        map.insert("ids", vec![1i64, 2, 3]);
        map.insert("weights", vec![0.5f64, 1.5]);
        map
    }

    #[test]
    fn test_exact_kind_reads() {
        let map = sample();

        assert_eq!(map.get_or("name", "none"), ("alice", true));
        assert_eq!(map.get_or("active", false), (true, true));
        assert_eq!(map.get_or("age", 0i64), (42, true));
        assert_eq!(map.get_or("score", 0.0f64), (3.0, true));

        let (roles, found) = map.get_or::<&[String]>("roles", &[]);
        assert!(found);
        assert_eq!(roles, ["admin".to_string(), "editor".to_string()]);

        assert_eq!(map.get_or::<&[bool]>("flags", &[]), (&[true, false][..], true));
        assert_eq!(map.get_or::<&[i64]>("ids", &[]), (&[1i64, 2, 3][..], true));
        assert_eq!(map.get_or::<&[f64]>("weights", &[]), (&[0.5f64, 1.5][..], true));
    }

    #[test]
    fn test_missing_key_returns_fallback() {
        let map = sample();
        assert_eq!(map.get_or("missing", "fallback"), ("fallback", false));
        assert_eq!(map.get_or("missing", 7i64), (7, false));
        assert_eq!(map.get_or::<&[i64]>("missing", &[9]), (&[9i64][..], false));
    }

    #[test]
    fn test_no_numeric_coercion() {
        let map = sample();

        // 3.0 is an exact integer value but stored as a float
        assert_eq!(map.get_or("score", -1i64), (-1, false));
        // 42 is stored as an integer and is never read as a float
        assert_eq!(map.get_or("age", -1.0f64), (-1.0, false));
        // Lists and scalars never cross
        assert_eq!(map.get_or("ids", 0i64), (0, false));
        assert_eq!(map.get_or::<&[f64]>("ids", &[]), (&[][..], false));
        assert_eq!(map.get_or("active", "no"), ("no", false));
    }

    #[test]
    fn test_get_list_only_returns_sequences() {
        let map = sample();
        assert!(map.get_list("ids").is_some());
        assert!(map.get_list("roles").is_some());
        assert!(map.get_list("age").is_none());
        assert!(map.get_list("missing").is_none());
    }

    #[test]
    fn test_insert_replaces_kind() {
        let mut map = sample();
        map.insert("age", "forty-two");
        assert_eq!(map.get_or("age", 0i64), (0, false));
        assert_eq!(map.get_or("age", ""), ("forty-two", true));
        assert_eq!(map.len(), 8);
    }
}
