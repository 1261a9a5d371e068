//! Convenience re-exports for common PageHaus usage
//!
//! This prelude module re-exports the most commonly used items from the PageHaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use pagehaus::prelude::*;
//!
//! let paginator = new_paginator("");
//! assert_eq!(paginator.limit(), 25);
//! ```

// Core PageHaus components
pub use crate::core::{new_paginator, new_paginator_with_defaults, PageHaus};
pub use crate::errors::PageHausError;

// Re-export centralized config
pub use config::{LimitConfig, PaginationConfig, SortConfig};

// Re-export commonly used query-object types for convenience
pub use query_object::prelude::*;

// Nullable column wrappers
pub use type_mapping::{Int16Slice, NullInt};

// Common external dependencies
pub use anyhow;
pub use sqlx;
