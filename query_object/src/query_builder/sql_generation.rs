//! SQL generation
//!
//! Compiles a fragment sequence into SQL text with `?` placeholders.

use crate::errors::PaginationError;
use crate::query_builder::fragment::{QueryFragment, IN_LIST_MARKER};
use serde_json::Value;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Compile fragments in order
    ///
    /// The result starts with a single space unless there are no fragments.
    pub fn compile_fragments(fragments: &[QueryFragment]) -> Result<String, PaginationError> {
        let mut sql = String::new();

        for (index, fragment) in fragments.iter().enumerate() {
            let text = Self::build_fragment_sql(index, fragment)?;

            if sql.is_empty() {
                sql.push(' ');
            } else {
                sql.push(' ');
                sql.push_str(fragment.connector.to_sql());
                sql.push(' ');
            }
            sql.push_str(&text);
        }

        Ok(sql)
    }

    /// Bind values of all fragments, in compile order
    pub fn collect_params(fragments: &[QueryFragment]) -> Vec<Value> {
        fragments
            .iter()
            .flat_map(|fragment| fragment.params.iter().cloned())
            .collect()
    }

    fn build_fragment_sql(index: usize, fragment: &QueryFragment) -> Result<String, PaginationError> {
        let mut text = fragment.text.clone();

        if fragment.has_in_list() {
            if fragment.params.is_empty() {
                return Err(PaginationError::MalformedFragmentRequest {
                    index,
                    text: fragment.text.clone(),
                });
            }
            text = text.replacen(IN_LIST_MARKER, &Self::in_list(fragment.params.len()), 1);
        }

        if fragment.grouped {
            text = format!("({})", text);
        }

        Ok(text)
    }

    /// `IN (?,?,...)` with `count` placeholders
    fn in_list(count: usize) -> String {
        format!("IN ({})", vec!["?"; count].join(","))
    }
}
