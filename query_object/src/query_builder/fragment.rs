//! Query fragments
//!
//! One condition of a WHERE-style clause with its bind values.

use serde_json::Value;
use std::fmt;

/// Token expanded to `IN (?,?,...)` sized to the fragment's parameter count
pub const IN_LIST_MARKER: &str = "@in";

/// Logical connector placed before a fragment
///
/// Ignored for the first fragment of a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

/// Single condition with positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFragment {
    pub connector: Connector,
    pub text: String,
    pub params: Vec<Value>,
    /// Wrap the compiled text in parentheses
    pub grouped: bool,
}

impl QueryFragment {
    pub fn new(connector: Connector, text: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            connector,
            text: text.into(),
            params,
            grouped: false,
        }
    }

    /// Fragment joined with AND
    pub fn and(text: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(Connector::And, text, params)
    }

    /// Fragment joined with OR
    pub fn or(text: impl Into<String>, params: Vec<Value>) -> Self {
        Self::new(Connector::Or, text, params)
    }

    /// Fragment using the IN-list marker, e.g. `in_list(Connector::And, "status", values)`
    /// compiles to `status IN (?,?)`
    pub fn in_list(connector: Connector, field: &str, values: Vec<Value>) -> Self {
        Self::new(connector, format!("{} {}", field, IN_LIST_MARKER), values)
    }

    /// Add one bind value
    pub fn param(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Mark the fragment as a parenthesized group
    pub fn grouped(mut self) -> Self {
        self.grouped = true;
        self
    }

    pub fn has_in_list(&self) -> bool {
        self.text.contains(IN_LIST_MARKER)
    }
}
