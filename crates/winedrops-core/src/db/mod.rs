//! SQLite order-ledger access.
//!
//! The ledger is externally owned and pre-populated; this crate only ever
//! reads it. Connections are opened `SQLITE_OPEN_READ_ONLY` with
//! `query_only = ON` so a stray write is a driver error, not a data hazard.
//!
//! `rusqlite::Connection` is `!Sync`, so statement execution is serialized
//! per connection by construction. Callers wanting parallel reads open one
//! connection per thread; the core never assumes exclusive store access.

pub mod schema;

use crate::config::QueryConfig;
use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Open the wine ledger read-only and apply runtime pragmas.
///
/// A missing ledger file is an open error, never an empty store.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or configured.
pub fn open_ledger(path: &Path, config: &QueryConfig) -> Result<Connection> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("open wine ledger {}", path.display()))?;

    configure_connection(&conn, config).context("configure sqlite pragmas")?;

    Ok(conn)
}

fn configure_connection(conn: &Connection, config: &QueryConfig) -> rusqlite::Result<()> {
    conn.pragma_update(None, "query_only", "ON")?;
    conn.busy_timeout(config.busy_timeout())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{open_ledger, schema};
    use crate::config::QueryConfig;
    use rusqlite::Connection;
    use tempfile::TempDir;

    fn seeded_ledger_path() -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("winedrops.db");
        let conn = Connection::open(&path).expect("create ledger file");
        conn.execute_batch(schema::LEDGER_SCHEMA_SQL)
            .expect("create ledger schema");
        (dir, path)
    }

    #[test]
    fn open_ledger_sets_busy_timeout() {
        let (_dir, path) = seeded_ledger_path();
        let config = QueryConfig {
            busy_timeout_ms: 1_234,
            ..QueryConfig::default()
        };
        let conn = open_ledger(&path, &config).expect("open ledger");

        let busy_timeout_ms: u64 = conn
            .pragma_query_value(None, "busy_timeout", |row| row.get(0))
            .expect("query busy_timeout");
        assert_eq!(busy_timeout_ms, 1_234);
    }

    #[test]
    fn open_ledger_rejects_writes() {
        let (_dir, path) = seeded_ledger_path();
        let conn = open_ledger(&path, &QueryConfig::default()).expect("open ledger");

        let result = conn.execute(
            "INSERT INTO master_wine (id, name, vintage) VALUES (1, 'Pinot Noir', 2019)",
            [],
        );
        assert!(result.is_err(), "read-only ledger must reject writes");
    }

    #[test]
    fn open_ledger_fails_on_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("absent.db");
        assert!(open_ledger(&missing, &QueryConfig::default()).is_err());
    }
}
