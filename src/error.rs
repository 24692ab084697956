//! Error taxonomy for the search engine.
//!
//! "Nothing found" is never an error: an empty result list is a normal return
//! value, whether it comes from a query that normalized to zero tokens or from
//! a query no document matched. Only infrastructure failures surface here, so
//! a caller can always tell "no matches" apart from "the store is down".

use crate::store::StoreError;
use thiserror::Error;

/// Errors returned by [`SearchEngine::search`](crate::engine::SearchEngine::search).
#[derive(Debug, Error)]
pub enum SearchError {
  /// The document store could not be reached or timed out. Never degraded to
  /// an empty list.
  #[error("document store unavailable: {0}")]
  StoreUnavailable(#[from] StoreError),

  /// The request carried a zero limit.
  #[error("request limit must be positive")]
  InvalidLimit,
}
