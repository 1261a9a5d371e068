//! Query fragment builder
//!
//! Accumulates fragments in insertion order. Compilation holds no cached
//! state, so `compile` and `params` can be called any number of times.

use crate::errors::PaginationError;
use crate::query_builder::fragment::{Connector, QueryFragment};
use crate::query_builder::sql_generation::SqlGenerator;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFragmentBuilder {
    pub(crate) fragments: Vec<QueryFragment>,
}

impl QueryFragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment; fragments with empty text are ignored
    pub fn add(&mut self, fragment: QueryFragment) {
        if fragment.text.is_empty() {
            trace_log!("Ignoring fragment with empty text");
            return;
        }
        self.fragments.push(fragment);
    }

    /// Chaining form of [`add`](Self::add)
    pub fn fragment(mut self, fragment: QueryFragment) -> Self {
        self.add(fragment);
        self
    }

    pub fn fragments(&self) -> &[QueryFragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Compile to SQL text with a leading space, e.g. `" a = ? OR b IN (?,?)"`
    pub fn compile(&self) -> Result<String, PaginationError> {
        SqlGenerator::compile_fragments(&self.fragments)
    }

    /// Bind values lining up with the placeholders of [`compile`](Self::compile)
    pub fn params(&self) -> Vec<Value> {
        SqlGenerator::collect_params(&self.fragments)
    }

    /// Compiled text and bind values
    pub fn build(&self) -> Result<(String, Vec<Value>), PaginationError> {
        Ok((self.compile()?, self.params()))
    }

    /// `" WHERE ..."` clause and bind values, or empty text when there are no fragments
    pub fn build_where_clause(&self) -> Result<(String, Vec<Value>), PaginationError> {
        if self.fragments.is_empty() {
            return Ok((String::new(), Vec::new()));
        }

        let (sql, params) = self.build()?;
        debug_log!("Compiled WHERE clause with {} params: {}", params.len(), sql);
        Ok((format!(" WHERE{}", sql), params))
    }

    /// Compile into one grouped fragment for nesting in another builder
    ///
    /// An empty builder yields a fragment with empty text, which `add` ignores.
    pub fn into_fragment(self, connector: Connector) -> Result<QueryFragment, PaginationError> {
        let (sql, params) = self.build()?;
        Ok(QueryFragment::new(connector, sql.trim_start(), params).grouped())
    }
}
