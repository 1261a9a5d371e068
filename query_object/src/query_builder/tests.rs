//! Query builder tests

use crate::errors::PaginationError;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::{Connector, QueryFragment, QueryFragmentBuilder};
use serde_json::{json, Value};

fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}

// ========================================
// Compilation
// ========================================

#[test]
fn test_compile_with_in_list() {
    let mut builder = QueryFragmentBuilder::new();
    builder.add(QueryFragment::and("status = ?", vec![json!(1)]));
    builder.add(QueryFragment::or("tag @in", vec![json!(2), json!(3), json!(4)]));

    assert_eq!(builder.compile().unwrap(), " status = ? OR tag IN (?,?,?)");
    assert_eq!(builder.params(), vec![json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn test_first_connector_is_ignored() {
    let builder = QueryFragmentBuilder::new()
        .fragment(QueryFragment::or("a = ?", vec![json!("x")]))
        .fragment(QueryFragment::and("b = ?", vec![json!("y")]));

    assert_eq!(builder.compile().unwrap(), " a = ? AND b = ?");
}

#[test]
fn test_grouped_fragment() {
    let builder = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("deleted = 0", vec![]))
        .fragment(
            QueryFragment::and("owner_id = ? OR shared = 1", vec![json!(42)]).grouped(),
        );

    assert_eq!(
        builder.compile().unwrap(),
        " deleted = 0 AND (owner_id = ? OR shared = 1)"
    );
    assert_eq!(builder.params(), vec![json!(42)]);
}

#[test]
fn test_grouped_in_list() {
    let builder = QueryFragmentBuilder::new().fragment(
        QueryFragment::in_list(Connector::And, "id", vec![json!(1), json!(2)]).grouped(),
    );

    assert_eq!(builder.compile().unwrap(), " (id IN (?,?))");
}

#[test]
fn test_single_value_in_list() {
    let builder =
        QueryFragmentBuilder::new().fragment(QueryFragment::and("id @in", vec![json!(7)]));
    assert_eq!(builder.compile().unwrap(), " id IN (?)");
}

#[test]
fn test_only_first_marker_is_expanded() {
    let builder = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("a @in AND b @in", vec![json!(1), json!(2)]));
    assert_eq!(builder.compile().unwrap(), " a IN (?,?) AND b @in");
}

#[test]
fn test_empty_builder() {
    let builder = QueryFragmentBuilder::new();
    assert_eq!(builder.compile().unwrap(), "");
    assert!(builder.params().is_empty());
    assert!(builder.is_empty());
}

#[test]
fn test_empty_text_is_ignored() {
    let mut builder = QueryFragmentBuilder::new();
    builder.add(QueryFragment::and("", vec![json!(1)]));
    builder.add(QueryFragment::and("x = ?", vec![json!(2)]));

    assert_eq!(builder.len(), 1);
    assert_eq!(builder.compile().unwrap(), " x = ?");
    assert_eq!(builder.params(), vec![json!(2)]);
}

#[test]
fn test_in_list_without_params_is_rejected() {
    let builder = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("a = 1", vec![]))
        .fragment(QueryFragment::and("tag @in", vec![]));

    match builder.compile() {
        Err(PaginationError::MalformedFragmentRequest { index, text }) => {
            assert_eq!(index, 1);
            assert_eq!(text, "tag @in");
        }
        other => panic!("Expected MalformedFragmentRequest, got {:?}", other),
    }
}

#[test]
fn test_compile_is_repeatable() {
    let builder = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("a = ?", vec![json!(1)]))
        .fragment(QueryFragment::or("b @in", vec![json!(2), json!(3)]));

    assert_eq!(builder.compile().unwrap(), builder.compile().unwrap());
    assert_eq!(builder.params(), builder.params());
}

#[test]
fn test_param_helper() {
    let fragment = QueryFragment::and("price BETWEEN ? AND ?", vec![])
        .param(10)
        .param(20.5);
    assert_eq!(fragment.params, vec![json!(10), json!(20.5)]);
}

// ========================================
// Placeholder / parameter alignment
// ========================================

#[test]
fn test_params_match_placeholders() {
    let cases: Vec<Vec<QueryFragment>> = vec![
        vec![QueryFragment::and("a = ?", vec![json!(1)])],
        vec![
            QueryFragment::and("a @in", (0..5).map(|i| json!(i)).collect()),
            QueryFragment::or("b = ? AND c = ?", vec![json!("x"), json!(null)]),
        ],
        vec![
            QueryFragment::and("active = 1", vec![]),
            QueryFragment::and("kind @in", vec![json!("a")]).grouped(),
            QueryFragment::or("score > ?", vec![json!(0.5)]),
        ],
    ];

    for fragments in cases {
        let mut builder = QueryFragmentBuilder::new();
        for fragment in fragments {
            builder.add(fragment);
        }

        let (sql, params) = builder.build().unwrap();
        assert_eq!(placeholder_count(&sql), params.len(), "SQL: {}", sql);
    }
}

#[test]
fn test_large_in_list() {
    let values: Vec<Value> = (0..1000).map(|i| json!(i)).collect();
    let builder = QueryFragmentBuilder::new().fragment(QueryFragment::and("id @in", values));

    let (sql, params) = builder.build().unwrap();
    assert_eq!(placeholder_count(&sql), 1000);
    assert_eq!(params.len(), 1000);
}

// ========================================
// WHERE clause and nesting
// ========================================

#[test]
fn test_build_where_clause() {
    let builder = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("status = ?", vec![json!("open")]));

    let (clause, params) = builder.build_where_clause().unwrap();
    assert_eq!(clause, " WHERE status = ?");
    assert_eq!(params, vec![json!("open")]);

    let (clause, params) = QueryFragmentBuilder::new().build_where_clause().unwrap();
    assert_eq!(clause, "");
    assert!(params.is_empty());
}

#[test]
fn test_nested_builder_as_group() {
    let inner = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("name LIKE ?", vec![json!("%bob%")]))
        .fragment(QueryFragment::or("email LIKE ?", vec![json!("%bob%")]));

    let outer = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("tenant_id = ?", vec![json!(9)]))
        .fragment(inner.into_fragment(Connector::And).unwrap());

    let (sql, params) = outer.build().unwrap();
    assert_eq!(sql, " tenant_id = ? AND (name LIKE ? OR email LIKE ?)");
    assert_eq!(params, vec![json!(9), json!("%bob%"), json!("%bob%")]);
}

#[test]
fn test_empty_nested_builder_is_dropped() {
    let outer = QueryFragmentBuilder::new()
        .fragment(QueryFragment::and("a = 1", vec![]))
        .fragment(QueryFragmentBuilder::new().into_fragment(Connector::Or).unwrap());

    assert_eq!(outer.len(), 1);
    assert_eq!(outer.compile().unwrap(), " a = 1");
}

#[test]
fn test_sql_generator_directly() {
    let fragments = vec![
        QueryFragment::and("x @in", vec![json!(1), json!(2)]),
        QueryFragment::or("y = ?", vec![json!(3)]),
    ];

    assert_eq!(
        SqlGenerator::compile_fragments(&fragments).unwrap(),
        " x IN (?,?) OR y = ?"
    );
    assert_eq!(
        SqlGenerator::collect_params(&fragments),
        vec![json!(1), json!(2), json!(3)]
    );
}
