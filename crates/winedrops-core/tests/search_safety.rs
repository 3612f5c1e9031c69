//! Property coverage: arbitrary search input can narrow results by literal
//! substring only, and never causes a storage error.

use proptest::prelude::*;
use rusqlite::{Connection, params};
use winedrops_core::db::schema::LEDGER_SCHEMA_SQL;
use winedrops_core::{BestSellerOptions, QueryConfig, get_best_selling_wines};

fn seeded_ledger() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(LEDGER_SCHEMA_SQL)
        .expect("create ledger schema");

    let wines: [(i64, &str, i64); 3] = [
        (1, "Pinot Noir", 2019),
        (2, "Riesling Trocken", 2020),
        (3, "Cuvee 100% Syrah", 2021),
    ];
    for (id, name, vintage) in wines {
        conn.execute(
            "INSERT INTO master_wine (id, name, vintage) VALUES (?1, ?2, ?3)",
            params![id, name, vintage],
        )
        .expect("insert wine");
        conn.execute(
            "INSERT INTO wine_product (id, master_wine_id, name, price) \
             VALUES (?1, ?2, 'bottle', 10.0)",
            params![id * 10, id],
        )
        .expect("insert product");
        conn.execute(
            "INSERT INTO customer_order (wine_product_id, status, total_amount, quantity) \
             VALUES (?1, 'paid', 20.0, 2)",
            params![id * 10],
        )
        .expect("insert order");
    }
    conn
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn arbitrary_search_never_causes_a_storage_error(term in ".{0,64}") {
        let conn = seeded_ledger();
        let envelope = get_best_selling_wines(
            &conn,
            &QueryConfig::default(),
            &BestSellerOptions { order_by: None, search: Some(term.clone()) },
        );

        prop_assert!(envelope.error.is_none(), "error for term {term:?}");
        prop_assert_eq!(envelope.total, envelope.items.len());

        // Every hit contains the trimmed term, matching SQLite's
        // ASCII-case-insensitive LIKE collation.
        let needle = term.trim().to_ascii_lowercase();
        for item in &envelope.items {
            prop_assert!(
                item.full_name.to_ascii_lowercase().contains(&needle),
                "{:?} does not contain {needle:?}",
                item.full_name
            );
        }
    }
}
