//! Peripheral full-table reads: wines, products, qualifying orders.
//!
//! No logic beyond fixed SQL and typed rows; these exist so the boundary
//! can serve its remaining read endpoints with the same envelope shape.

use crate::error::{StatsError, storage};
use crate::query::QUALIFYING_STATUSES_SQL;
use rusqlite::Connection;
use serde::Serialize;

/// A `master_wine` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WineRow {
    pub id: i64,
    pub name: String,
    pub vintage: i64,
}

/// A `wine_product` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub master_wine_id: i64,
    pub name: String,
    pub price: f64,
}

/// A `customer_order` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: i64,
    pub wine_product_id: i64,
    pub status: String,
    pub total_amount: f64,
    pub quantity: i64,
}

/// List every wine in the catalog, id ascending.
///
/// # Errors
///
/// Returns `Storage` if the query fails.
pub fn list_wines(conn: &Connection) -> Result<Vec<WineRow>, StatsError> {
    let sql = "SELECT id, name, vintage FROM master_wine ORDER BY id";

    let mut stmt = conn.prepare(sql).map_err(storage("prepare wines query"))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(WineRow {
                id: row.get(0)?,
                name: row.get(1)?,
                vintage: row.get(2)?,
            })
        })
        .map_err(storage("execute wines query"))?;

    let mut wines = Vec::new();
    for row in rows {
        wines.push(row.map_err(storage("read wine row"))?);
    }
    Ok(wines)
}

/// List every wine product, id ascending.
///
/// # Errors
///
/// Returns `Storage` if the query fails.
pub fn list_products(conn: &Connection) -> Result<Vec<ProductRow>, StatsError> {
    let sql = "SELECT id, master_wine_id, name, price FROM wine_product ORDER BY id";

    let mut stmt = conn
        .prepare(sql)
        .map_err(storage("prepare products query"))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(ProductRow {
                id: row.get(0)?,
                master_wine_id: row.get(1)?,
                name: row.get(2)?,
                price: row.get(3)?,
            })
        })
        .map_err(storage("execute products query"))?;

    let mut products = Vec::new();
    for row in rows {
        products.push(row.map_err(storage("read product row"))?);
    }
    Ok(products)
}

/// List qualifying (`paid` or `dispatched`) orders, id ascending.
///
/// # Errors
///
/// Returns `Storage` if the query fails.
pub fn list_qualifying_orders(conn: &Connection) -> Result<Vec<OrderRow>, StatsError> {
    let sql = format!(
        "SELECT id, wine_product_id, status, total_amount, quantity \
         FROM customer_order WHERE status IN ({QUALIFYING_STATUSES_SQL}) \
         ORDER BY id"
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(storage("prepare qualifying orders query"))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(OrderRow {
                id: row.get(0)?,
                wine_product_id: row.get(1)?,
                status: row.get(2)?,
                total_amount: row.get(3)?,
                quantity: row.get(4)?,
            })
        })
        .map_err(storage("execute qualifying orders query"))?;

    let mut orders = Vec::new();
    for row in rows {
        orders.push(row.map_err(storage("read order row"))?);
    }
    Ok(orders)
}
