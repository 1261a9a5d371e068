//! Error types for type mapping
//!
//! This module defines the errors raised while converting tag values and
//! nullable column wrappers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMappingError {
    #[error("Invalid int16 list item '{item}': {reason}")]
    InvalidInt16Slice { item: String, reason: String },

    #[error("Unsupported JSON value for tag: {0}")]
    UnsupportedJson(String),
}
