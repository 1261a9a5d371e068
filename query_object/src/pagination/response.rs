//! Response map
//!
//! Pagination summary for JSON responses. Meta entries are written first so
//! the fixed pagination keys win on collision.

use crate::pagination::state::PaginationState;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

impl PaginationState {
    pub fn to_response_map(&self) -> Map<String, Value> {
        let mut response: Map<String, Value> = self
            .meta
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect();

        response.insert("page".to_string(), json!(self.page));
        response.insert("limit".to_string(), json!(self.limit));
        response.insert("sort".to_string(), json!(self.sort));
        response.insert("order".to_string(), json!(self.order.as_str()));
        response.insert("search".to_string(), json!(self.search));
        response.insert("count".to_string(), json!(self.count));
        response.insert("from".to_string(), json!(self.from));
        response.insert("to".to_string(), json!(self.to));
        response.insert("total".to_string(), json!(self.total));

        response
    }
}

impl Serialize for PaginationState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_response_map().serialize(serializer)
    }
}
