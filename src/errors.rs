//! Error types for the PageHaus crate
//!
//! This module contains all error types that can be returned by PageHaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageHausError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Pagination error: {0}")]
    Pagination(#[from] query_object::PaginationError),

    #[error("Type mapping error: {0}")]
    TypeMapping(#[from] type_mapping::TypeMappingError),
}
