//! # PageHaus
//!
//! Request pagination and composable SQL filter fragments for MySQL-style
//! positional-parameter queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagehaus::prelude::*;
//!
//! fn main() -> Result<(), PageHausError> {
//!     let pagehaus = PageHaus::new(PaginationConfig::default())?;
//!
//!     // `encoded` is the override payload the client echoed back (may be empty)
//!     let mut paginator = pagehaus.paginator("eyJwYWdlIjogMiwgImxpbWl0IjogMTB9")?;
//!     paginator.set_count(95);
//!
//!     let filters = pagehaus
//!         .query_builder()
//!         .fragment(QueryFragment::and("status = ?", vec![json!("open")]))
//!         .fragment(QueryFragment::or("tag @in", vec![json!(2), json!(3)]));
//!
//!     let (where_clause, params) = filters.build_where_clause()?;
//!     let sql = format!(
//!         "SELECT * FROM items{}{}",
//!         where_clause,
//!         paginator.to_sql_fragment()
//!     );
//!
//!     assert_eq!(
//!         sql,
//!         "SELECT * FROM items WHERE status = ? OR tag IN (?,?) ORDER BY id ASC LIMIT 10, 10"
//!     );
//!     assert_eq!(params.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::{new_paginator, new_paginator_with_defaults, PageHaus};
pub use errors::PageHausError;

// Re-export centralized config
pub use config::{LimitConfig, PaginationConfig, SortConfig};

// Re-export internal crates used in the public API
pub use query_object;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use sqlx;
