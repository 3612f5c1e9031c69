//! Whitelisted ranking expressions for the best-seller query.
//!
//! This is the sole sanitization boundary between caller input and the
//! ORDER BY clause: the raw key is never interpolated into SQL, only the
//! resolved clause from the fixed enumeration below.

use anyhow::{Result, bail};
use std::fmt;
use std::str::FromStr;

/// Metric a best-seller listing is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    /// Total revenue over qualifying orders.
    #[default]
    Revenue,
    /// Bottles sold over qualifying orders.
    Quantity,
    /// Number of qualifying orders.
    Orders,
}

impl Ranking {
    /// Map an untrusted request key onto a ranking.
    ///
    /// Unrecognized or absent keys fall back to `Revenue`; this function is
    /// total on purpose so a bad key can never surface as an error or reach
    /// the query text.
    #[must_use]
    pub fn resolve(key: Option<&str>) -> Self {
        key.and_then(|k| k.trim().parse().ok()).unwrap_or_default()
    }

    /// Ranking is descending on the metric; the `mw.id` tie-break keeps
    /// output deterministic for equal metrics.
    pub(crate) const fn sql_clause(self) -> &'static str {
        match self {
            Self::Revenue => "ORDER BY revenue DESC, mw.id ASC",
            Self::Quantity => "ORDER BY sold_bottles DESC, mw.id ASC",
            Self::Orders => "ORDER BY order_count DESC, mw.id ASC",
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revenue => f.write_str("revenue"),
            Self::Quantity => f.write_str("quantity"),
            Self::Orders => f.write_str("orders"),
        }
    }
}

impl FromStr for Ranking {
    type Err = anyhow::Error;

    /// Strict parse for trusted surfaces (CLI flags). Untrusted request
    /// keys go through [`Ranking::resolve`] instead.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REVENUE" => Ok(Self::Revenue),
            "QUANTITY" => Ok(Self::Quantity),
            "ORDERS" => Ok(Self::Orders),
            other => bail!("unknown ranking '{other}': expected one of revenue, quantity, orders"),
        }
    }
}
