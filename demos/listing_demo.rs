//! # Listing Demo
//!
//! This demo walks one listing request through PageHaus:
//! - Encoding the override payload a client echoes back
//! - Building a paginator from configuration
//! - Composing filters with the fragment builder
//! - Rendering the final SQL and the response summary
//!
//! No database connection is needed; the prepared query is only printed.

use pagehaus::prelude::*;
use sqlx::Execute;

fn main() -> anyhow::Result<()> {
    println!("🚀 PageHaus Listing Demo");
    println!("========================");

    // 1. Configuration
    println!("\n⚙️  Step 1: Configuration");
    println!("-------------------------");

    let config = PaginationConfig::new(
        vec![10, 20, 50],
        20,
        vec!["id".to_string(), "created_at".to_string(), "price".to_string()],
        "created_at".to_string(),
    );
    let pagehaus = PageHaus::new(config)?;
    println!("✅ Allowed limits: {:?}", pagehaus.config().limits.allowed);
    println!("✅ Allowed sorts: {:?}", pagehaus.config().sort.allowed);

    // 2. Client payload
    println!("\n📦 Step 2: Override Payload");
    println!("---------------------------");

    let mut tags = TagMap::new();
    tags.insert("category_ids", vec![3i64, 7, 11]);
    tags.insert("in_stock", true);

    let encoded = OverrideCodec::encode(&Overrides {
        page: Some(2),
        limit: Some(10),
        sort: Some("price".to_string()),
        order: Some("desc".to_string()),
        search: Some("lamp".to_string()),
        tags: Some(tags),
    });
    println!("✅ Encoded payload: {}", encoded);

    // 3. Paginator
    println!("\n📖 Step 3: Paginator");
    println!("--------------------");

    let mut paginator = pagehaus.paginator(&encoded)?;
    paginator.set_meta("currency", "EUR");
    println!(
        "✅ page={} limit={} sort={} order={}",
        paginator.page(),
        paginator.limit(),
        paginator.sort(),
        paginator.order()
    );

    // 4. Filters
    println!("\n🔍 Step 4: Filters");
    println!("------------------");

    let (category_ids, _) = paginator.int64_slice_tag("category_ids", &[]);
    let (in_stock, _) = paginator.bool_tag("in_stock", false);

    let mut filters = pagehaus.query_builder();
    filters.add(QueryFragment::and(
        "name LIKE ?",
        vec![json!(format!("%{}%", paginator.search()))],
    ));
    if !category_ids.is_empty() {
        filters.add(QueryFragment::in_list(
            Connector::And,
            "category_id",
            category_ids.iter().map(|id| json!(id)).collect(),
        ));
    }
    if in_stock {
        filters.add(
            QueryFragment::and("stock > ? OR backorder = ?", vec![json!(0), json!(true)])
                .grouped(),
        );
    }

    let (where_clause, params) = filters.build_where_clause()?;
    println!("✅ WHERE clause:{}", where_clause);
    println!("✅ Parameters: {:?}", params);

    // 5. Window and SQL
    println!("\n🧮 Step 5: Page Window");
    println!("----------------------");

    // Normally the result of a COUNT(*) query with the same WHERE clause
    paginator.set_count(37);
    println!(
        "✅ rows {}..{} of {} ({} pages)",
        paginator.from(),
        paginator.to(),
        paginator.count(),
        paginator.total()
    );

    let sql = format!(
        "SELECT * FROM products{}{}",
        where_clause,
        paginator.to_sql_fragment()
    );
    let query = prepare_query(&sql, &params);
    println!("✅ SQL: {}", query.sql());

    // 6. Response
    println!("\n📤 Step 6: Response");
    println!("-------------------");
    println!("{}", serde_json::to_string_pretty(&paginator)?);

    println!("\n🎉 Demo completed");
    Ok(())
}
