//! Core PageHaus functionality
//!
//! This module contains the PageHaus coordinator, which creates one
//! pagination state per request from a shared configuration, and the
//! free factory functions.

use config::PaginationConfig;
use query_object::{PaginationState, QueryFragmentBuilder};

use crate::errors::PageHausError;

/// Creates per-request pagination states from one configuration
#[derive(Debug, Clone, Default)]
pub struct PageHaus {
    config: PaginationConfig,
}

impl PageHaus {
    /// Create new PageHaus from a validated configuration
    pub fn new(config: PaginationConfig) -> Result<Self, PageHausError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create new PageHaus from PAGEHAUS_CONFIG or ./pagehaus.toml
    pub fn load() -> Result<Self, PageHausError> {
        Self::new(PaginationConfig::load()?)
    }

    /// Get configuration reference
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Pagination state for a request, rejecting undecodable override payloads
    pub fn paginator(&self, encoded: &str) -> Result<PaginationState, PageHausError> {
        Ok(PaginationState::from_config(&self.config, encoded)?)
    }

    /// Pagination state for a request, using defaults when the override payload
    /// cannot be decoded
    pub fn paginator_or_default(&self, encoded: &str) -> PaginationState {
        PaginationState::init_lenient(
            self.config.limits.allowed.iter().copied(),
            self.config.limits.default,
            self.config.sort.allowed.iter().cloned(),
            &self.config.sort.default,
            encoded,
        )
    }

    /// Empty fragment builder for a request
    pub fn query_builder(&self) -> QueryFragmentBuilder {
        QueryFragmentBuilder::new()
    }
}

/// Pagination state with the default configuration: limits 10/25/50/100
/// (default 25), sort by `id`
pub fn new_paginator(encoded: &str) -> PaginationState {
    PageHaus::default().paginator_or_default(encoded)
}

/// Pagination state with explicit allow-lists and defaults
pub fn new_paginator_with_defaults(
    limits: &[u32],
    default_limit: u32,
    sorts: &[&str],
    default_sort: &str,
    encoded: &str,
) -> PaginationState {
    PaginationState::init_lenient(
        limits.iter().copied(),
        default_limit,
        sorts.iter().copied(),
        default_sort,
        encoded,
    )
}
