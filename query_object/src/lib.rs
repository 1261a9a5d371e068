//! Query Object - pagination and query fragment layer for PageHaus
//!
//! This crate provides the pagination state engine (override decoding,
//! allow-list validation, page window derivation, typed tag/meta access)
//! and the WHERE-style query fragment builder.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod execution;
pub mod pagination;
pub mod prelude;
pub mod query_builder;
pub mod validation;

pub use errors::PaginationError;
pub use execution::{bind_params, bind_params_as, prepare_query};
pub use pagination::{OverrideCodec, Overrides, PaginationState, SortOrder};
pub use query_builder::{Connector, QueryFragment, QueryFragmentBuilder, IN_LIST_MARKER};
pub use type_mapping::{FromTagValue, Int16Slice, NullInt, TagMap, TagValue};
pub use validation::{ValidatedSortField, ValidationError};
