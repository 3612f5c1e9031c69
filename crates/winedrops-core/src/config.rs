use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatsConfig {
    #[serde(default)]
    pub query: QueryConfig,
}

/// Limits applied to ledger queries.
///
/// Defaults are intentionally permissive: no search length bound and no
/// per-query deadline, matching the behavior of a store that is known to be
/// small. Operators with growing ledgers set both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Milliseconds to wait on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// Per-query deadline in milliseconds; unset means unbounded.
    #[serde(default)]
    pub query_timeout_ms: Option<u64>,
    /// Maximum accepted search term length in bytes; unset means unbounded.
    #[serde(default)]
    pub max_search_len: Option<usize>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            busy_timeout_ms: default_busy_timeout_ms(),
            query_timeout_ms: None,
            max_search_len: None,
        }
    }
}

impl QueryConfig {
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    #[must_use]
    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_ms.map(Duration::from_millis)
    }
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<StatsConfig> {
    if !path.exists() {
        return Ok(StatsConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<StatsConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_busy_timeout_ms() -> u64 {
    5_000
}
