//! Parameter binding for the query execution layer
//!
//! Binds compiled fragment parameters positionally onto sqlx MySQL queries.
//! Nothing here opens a connection or runs a statement.

use serde_json::Value;
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::{Query, QueryAs};

// Shared parameter binding logic for Query and QueryAs
macro_rules! bind_json_param {
    ($query:expr, $param:expr) => {
        match $param {
            Value::String(s) => $query.bind(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    $query.bind(i)
                } else if let Some(u) = n.as_u64() {
                    $query.bind(u)
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            Value::Bool(b) => $query.bind(b),
            Value::Null => $query.bind(Option::<String>::None),
            other => $query.bind(other.to_string()),
        }
    };
}

/// Bind every parameter in order
pub fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[Value],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = bind_json_param!(query, param.clone());
    }
    query
}

/// Bind every parameter in order on a typed query
pub fn bind_params_as<'q, O>(
    mut query: QueryAs<'q, MySql, O, MySqlArguments>,
    params: &[Value],
) -> QueryAs<'q, MySql, O, MySqlArguments> {
    for param in params {
        query = bind_json_param!(query, param.clone());
    }
    query
}

/// Create a query from SQL text and bind the parameters
pub fn prepare_query<'q>(sql: &'q str, params: &[Value]) -> Query<'q, MySql, MySqlArguments> {
    bind_params(sqlx::query(sql), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PaginationState;
    use crate::query_builder::{QueryFragment, QueryFragmentBuilder};
    use serde_json::json;
    use sqlx::Execute;

    #[test]
    fn test_prepare_query_keeps_sql() {
        let builder = QueryFragmentBuilder::new()
            .fragment(QueryFragment::and("status = ?", vec![json!("open")]))
            .fragment(QueryFragment::or("id @in", vec![json!(1), json!(u64::MAX)]))
            .fragment(QueryFragment::and("score > ?", vec![json!(0.5)]))
            .fragment(QueryFragment::and("archived = ?", vec![json!(false)]))
            .fragment(QueryFragment::and("note <=> ?", vec![json!(null)]))
            .fragment(QueryFragment::and("payload = ?", vec![json!({"a": 1})]));

        let mut state = PaginationState::new([25], 25, ["id"], "id");
        state.set_count(40);

        let (where_clause, params) = builder.build_where_clause().unwrap();
        let sql = format!("SELECT * FROM items{}{}", where_clause, state.to_sql_fragment());

        let query = prepare_query(&sql, &params);
        assert_eq!(query.sql(), sql.as_str());
        assert!(sql.ends_with(" ORDER BY id ASC LIMIT 0, 25"));
    }
}
