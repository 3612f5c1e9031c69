//! Ledger query layer.
//!
//! Boundary functions here take an injected connection, never own one, and
//! always return the uniform [`Envelope`] — failures are carried in the
//! envelope's error field, not thrown past the boundary.

pub mod best_sellers;
pub mod catalog;
pub mod ranking;

use crate::config::QueryConfig;
use crate::envelope::Envelope;
use best_sellers::WineStat;
use catalog::{OrderRow, ProductRow, WineRow};
use ranking::Ranking;
use rusqlite::Connection;
use tracing::debug;

/// Orders in these states (and only these) count toward sales aggregates.
pub(crate) const QUALIFYING_STATUSES_SQL: &str = "'paid', 'dispatched'";

/// Untrusted request options for a best-seller listing.
#[derive(Debug, Clone, Default)]
pub struct BestSellerOptions {
    /// Raw ranking key; unrecognized or absent falls back to revenue.
    pub order_by: Option<String>,
    /// Substring filter on the display name; empty means no filter.
    pub search: Option<String>,
}

/// Ranked best-seller listing with optional substring search.
#[must_use]
pub fn get_best_selling_wines(
    conn: &Connection,
    config: &QueryConfig,
    options: &BestSellerOptions,
) -> Envelope<WineStat> {
    let ranking = Ranking::resolve(options.order_by.as_deref());
    debug!(
        %ranking,
        search = options.search.as_deref().unwrap_or(""),
        "best sellers query"
    );

    Envelope::from_result(best_sellers::best_selling_wines(
        conn,
        config,
        ranking,
        options.search.as_deref(),
    ))
}

/// Full wine catalog.
#[must_use]
pub fn get_wines(conn: &Connection) -> Envelope<WineRow> {
    Envelope::from_result(catalog::list_wines(conn))
}

/// Full product listing.
#[must_use]
pub fn get_products(conn: &Connection) -> Envelope<ProductRow> {
    Envelope::from_result(catalog::list_products(conn))
}

/// Qualifying orders only.
#[must_use]
pub fn get_qualifying_orders(conn: &Connection) -> Envelope<OrderRow> {
    Envelope::from_result(catalog::list_qualifying_orders(conn))
}
