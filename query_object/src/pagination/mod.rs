//! Pagination utilities
//!
//! This module turns a client override payload into validated paging
//! parameters and derives the row window from a total row count.

pub mod accessors;
pub mod codec;
pub mod ordering;
pub mod response;
pub mod state;


pub use codec::{OverrideCodec, Overrides};
pub use ordering::SortOrder;
pub use state::PaginationState;
