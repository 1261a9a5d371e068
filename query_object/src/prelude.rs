//! Convenience re-exports for common query-object usage

// Pagination
pub use crate::pagination::{OverrideCodec, Overrides, PaginationState, SortOrder};

// Query building
pub use crate::query_builder::{Connector, QueryFragment, QueryFragmentBuilder};

// Query execution layer binding
pub use crate::execution::{bind_params, bind_params_as, prepare_query};

// Error types
pub use crate::errors::PaginationError;

// Tag values
pub use type_mapping::{TagMap, TagValue};

// Configuration
pub use config::PaginationConfig;

// Common external dependencies that are frequently used
pub use serde_json::{json, Value};
