//! Uniform response envelope for every core-facing read operation.

use crate::error::StatsError;
use serde::Serialize;
use tracing::warn;

/// Serializable error payload: stable machine code plus human message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeError {
    pub code: &'static str,
    pub message: String,
}

/// `{items, total, error}` — the only contract the presentation layer needs.
///
/// `total` always equals `items.len()`; there is no pagination. On failure
/// the item list is empty and `error` is populated, so error and empty-result
/// states are distinguishable only through the error field, never through
/// item count alone. Partial data is never presented as complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub error: Option<EnvelopeError>,
}

impl<T> Envelope<T> {
    /// Wrap a query outcome, logging failures at the boundary.
    #[must_use]
    pub fn from_result(outcome: Result<Vec<T>, StatsError>) -> Self {
        match outcome {
            Ok(items) => Self {
                total: items.len(),
                items,
                error: None,
            },
            Err(err) => {
                warn!(code = err.code(), error = %err, "query failed; returning empty envelope");
                Self {
                    items: Vec::new(),
                    total: 0,
                    error: Some(EnvelopeError {
                        code: err.code(),
                        message: err.to_string(),
                    }),
                }
            }
        }
    }
}
