//! Typed tag and meta accessors
//!
//! Each accessor returns `(stored, true)` when the key holds exactly the
//! requested kind and `(fallback, false)` otherwise. Kinds are never coerced.

use crate::pagination::state::PaginationState;
use type_mapping::TagValue;

impl PaginationState {
    /// Stored tag when it is any sequence kind
    pub fn slice_tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get_list(key)
    }

    pub fn string_tag<'a>(&'a self, key: &str, fallback: &'a str) -> (&'a str, bool) {
        self.tags.get_or(key, fallback)
    }

    pub fn string_slice_tag<'a>(&'a self, key: &str, fallback: &'a [String]) -> (&'a [String], bool) {
        self.tags.get_or(key, fallback)
    }

    pub fn bool_tag(&self, key: &str, fallback: bool) -> (bool, bool) {
        self.tags.get_or(key, fallback)
    }

    pub fn bool_slice_tag<'a>(&'a self, key: &str, fallback: &'a [bool]) -> (&'a [bool], bool) {
        self.tags.get_or(key, fallback)
    }

    pub fn float64_tag(&self, key: &str, fallback: f64) -> (f64, bool) {
        self.tags.get_or(key, fallback)
    }

    pub fn float64_slice_tag<'a>(&'a self, key: &str, fallback: &'a [f64]) -> (&'a [f64], bool) {
        self.tags.get_or(key, fallback)
    }

    pub fn int64_tag(&self, key: &str, fallback: i64) -> (i64, bool) {
        self.tags.get_or(key, fallback)
    }

    pub fn int64_slice_tag<'a>(&'a self, key: &str, fallback: &'a [i64]) -> (&'a [i64], bool) {
        self.tags.get_or(key, fallback)
    }

    /// Stored meta entry when it is any sequence kind
    pub fn slice_meta(&self, key: &str) -> Option<&TagValue> {
        self.meta.get_list(key)
    }

    pub fn string_meta<'a>(&'a self, key: &str, fallback: &'a str) -> (&'a str, bool) {
        self.meta.get_or(key, fallback)
    }

    pub fn string_slice_meta<'a>(&'a self, key: &str, fallback: &'a [String]) -> (&'a [String], bool) {
        self.meta.get_or(key, fallback)
    }

    pub fn bool_meta(&self, key: &str, fallback: bool) -> (bool, bool) {
        self.meta.get_or(key, fallback)
    }

    pub fn bool_slice_meta<'a>(&'a self, key: &str, fallback: &'a [bool]) -> (&'a [bool], bool) {
        self.meta.get_or(key, fallback)
    }

    pub fn float64_meta(&self, key: &str, fallback: f64) -> (f64, bool) {
        self.meta.get_or(key, fallback)
    }

    pub fn float64_slice_meta<'a>(&'a self, key: &str, fallback: &'a [f64]) -> (&'a [f64], bool) {
        self.meta.get_or(key, fallback)
    }

    pub fn int64_meta(&self, key: &str, fallback: i64) -> (i64, bool) {
        self.meta.get_or(key, fallback)
    }

    pub fn int64_slice_meta<'a>(&'a self, key: &str, fallback: &'a [i64]) -> (&'a [i64], bool) {
        self.meta.get_or(key, fallback)
    }
}
