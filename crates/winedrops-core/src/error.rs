use thiserror::Error;

/// Typed failures crossing the query boundary.
///
/// Storage failures carry the underlying driver error; validation failures
/// are distinguishable by code so the presentation layer can tell a bad
/// request from a broken store.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The underlying store was unreachable or query execution failed.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        source: rusqlite::Error,
    },

    /// The search term exceeds the configured length bound.
    #[error("search term is {len} bytes; limit is {limit}")]
    SearchTooLong { len: usize, limit: usize },
}

impl StatsError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Storage { .. } => "E3001",
            Self::SearchTooLong { .. } => "E2001",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Storage { .. } => {
                Some("Check that the ledger file exists and is a readable winedrops database.")
            }
            Self::SearchTooLong { .. } => Some("Shorten the search term and retry."),
        }
    }
}

/// Adapter for `.map_err(storage("..."))` on driver calls.
pub(crate) fn storage(context: &'static str) -> impl FnOnce(rusqlite::Error) -> StatsError {
    move |source| StatsError::Storage { context, source }
}
