//! Unified type mapping for pagination tags, response meta and nullable columns
//! This crate provides the value model used across the pagehaus ecosystem

pub mod errors;
pub mod nullable;
pub mod serialize;
pub mod tag_map;
pub mod types;

pub use errors::TypeMappingError;
pub use nullable::{Int16Slice, NullInt};
pub use serialize::{tag_map_from_json, tag_map_to_json};
pub use tag_map::{FromTagValue, TagMap};
pub use types::TagValue;
