//! Best-seller aggregation: query construction and execution.
//!
//! One grouped query joins wine -> product (inner) -> order (left), keeps
//! qualifying orders only, and sums per wine. The status predicate on the
//! left-joined table collapses it to inner semantics, so a wine with zero
//! qualifying orders is absent from the result set entirely rather than
//! reported with zero metrics. Callers must not expect zero-sale wines.

use crate::config::QueryConfig;
use crate::error::{StatsError, storage};
use crate::query::QUALIFYING_STATUSES_SQL;
use crate::query::ranking::Ranking;
use rusqlite::{Connection, params};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Aggregated sales metrics for one wine, summed over qualifying orders
/// across all of its products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WineStat {
    pub id: i64,
    pub full_name: String,
    pub revenue: f64,
    pub sold_bottles: i64,
    pub order_count: i64,
}

/// Statements between progress callbacks; low enough that a deadline is
/// noticed promptly, high enough to stay off profile.
const PROGRESS_OPS: i32 = 1_000;

/// Execute the ranked best-seller aggregation.
///
/// `search`, when non-empty after trimming, restricts results to wines whose
/// display name (`name || ' ' || vintage`) contains the term as a literal
/// substring. Matching uses SQLite's default LIKE collation:
/// ASCII-case-insensitive, Unicode case-sensitive. The term is always bound,
/// never spliced into the query text.
///
/// # Errors
///
/// Returns `SearchTooLong` if the term exceeds the configured bound, or
/// `Storage` if the underlying query fails — the item list is never
/// partially populated on failure.
pub fn best_selling_wines(
    conn: &Connection,
    config: &QueryConfig,
    ranking: Ranking,
    search: Option<&str>,
) -> Result<Vec<WineStat>, StatsError> {
    let term = search.map(str::trim).filter(|t| !t.is_empty());

    if let (Some(term), Some(limit)) = (term, config.max_search_len) {
        if term.len() > limit {
            return Err(StatsError::SearchTooLong {
                len: term.len(),
                limit,
            });
        }
    }

    let sql = best_selling_sql(ranking, term.is_some());
    let _deadline = QueryDeadline::install(conn, config.query_timeout());

    let mut stmt = conn
        .prepare(&sql)
        .map_err(storage("prepare best sellers query"))?;

    let rows = match term {
        Some(term) => stmt.query_map(params![like_pattern(term)], row_to_wine_stat),
        None => stmt.query_map([], row_to_wine_stat),
    }
    .map_err(storage("execute best sellers query"))?;

    let mut stats = Vec::new();
    for row in rows {
        stats.push(row.map_err(storage("read best sellers row"))?);
    }
    Ok(stats)
}

fn best_selling_sql(ranking: Ranking, with_search: bool) -> String {
    let search_clause = if with_search {
        " AND mw.name || ' ' || mw.vintage LIKE ?1 ESCAPE '\\'"
    } else {
        ""
    };

    format!(
        "SELECT mw.id AS id, \
         mw.name || ' ' || mw.vintage AS full_name, \
         SUM(co.total_amount) AS revenue, \
         SUM(co.quantity) AS sold_bottles, \
         COUNT(co.id) AS order_count \
         FROM master_wine mw \
         INNER JOIN wine_product wp ON wp.master_wine_id = mw.id \
         LEFT JOIN customer_order co ON co.wine_product_id = wp.id \
         WHERE co.status IN ({QUALIFYING_STATUSES_SQL}){search_clause} \
         GROUP BY mw.id \
         {}",
        ranking.sql_clause()
    )
}

/// Build the bound LIKE pattern for a literal substring match.
///
/// LIKE metacharacters in the term (`%`, `_`, and the escape character) are
/// escaped so user input can only ever narrow by literal text.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn row_to_wine_stat(row: &rusqlite::Row<'_>) -> rusqlite::Result<WineStat> {
    Ok(WineStat {
        id: row.get(0)?,
        full_name: row.get(1)?,
        revenue: row.get(2)?,
        sold_bottles: row.get(3)?,
        order_count: row.get(4)?,
    })
}

/// Scoped per-query deadline via SQLite's progress callback.
///
/// Installed only when a timeout is configured; dropping the guard removes
/// the handler so it cannot outlive the statement it was armed for. On
/// expiry the statement is interrupted and surfaces as a storage error.
struct QueryDeadline<'conn> {
    conn: &'conn Connection,
    armed: bool,
}

impl<'conn> QueryDeadline<'conn> {
    fn install(conn: &'conn Connection, timeout: Option<Duration>) -> Self {
        let armed = timeout.is_some();
        if let Some(timeout) = timeout {
            let start = Instant::now();
            conn.progress_handler(PROGRESS_OPS, Some(move || start.elapsed() >= timeout));
        }
        Self { conn, armed }
    }
}

impl Drop for QueryDeadline<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.conn.progress_handler(0, None::<fn() -> bool>);
        }
    }
}
