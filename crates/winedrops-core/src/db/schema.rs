//! Canonical ledger schema.
//!
//! The production ledger is created and populated out of process; the DDL
//! here documents the shape the query layer relies on and backs the test
//! fixtures. There is no migration machinery — the store is read-only.
//!
//! - `master_wine` is the wine identity; its display name is
//!   `name || ' ' || vintage`
//! - `wine_product` models the sellable listings of a wine (package sizes,
//!   re-listings); a wine may have several
//! - `customer_order` references a product; only `paid` and `dispatched`
//!   orders count toward sales aggregates

/// DDL for the three ledger relations.
pub const LEDGER_SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS master_wine (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0),
    vintage INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS wine_product (
    id INTEGER PRIMARY KEY,
    master_wine_id INTEGER NOT NULL REFERENCES master_wine(id),
    name TEXT NOT NULL,
    price REAL NOT NULL CHECK (price >= 0)
);

CREATE TABLE IF NOT EXISTS customer_order (
    id INTEGER PRIMARY KEY,
    wine_product_id INTEGER NOT NULL REFERENCES wine_product(id),
    status TEXT NOT NULL CHECK (
        status IN ('pending_payment', 'paid', 'dispatched', 'cancelled', 'refunded')
    ),
    total_amount REAL NOT NULL CHECK (total_amount >= 0),
    quantity INTEGER NOT NULL CHECK (quantity >= 0)
);
";
