//! Query builder utilities
//!
//! This module provides WHERE-style fragment composition with positional parameters.

pub mod builder;
pub mod fragment;
pub mod sql_generation;

#[cfg(test)]
mod tests;

pub use builder::QueryFragmentBuilder;
pub use fragment::{Connector, QueryFragment, IN_LIST_MARKER};
