//! Defines the `DocumentStore` trait for pluggable document-query backends.

use crate::normalize::TokenQuery;
use crate::types::{EntityKind, SearchDocument};
use thiserror::Error;

/// A failure to reach or query the document store.
///
/// These are infrastructure failures, distinct from the legitimate "no
/// matches" outcome, and always propagate to the caller of
/// [`search`](crate::engine::SearchEngine::search).
#[derive(Debug, Error)]
pub enum StoreError {
  /// The backend could not be reached.
  #[error("store unreachable: {0}")]
  Unreachable(String),

  /// The backend did not answer in time.
  #[error("store query timed out")]
  Timeout,
}

/// One row from the ranked (primary) query path.
///
/// The rank is an opaque, monotonic relevance score in roughly `[0, 1]`
/// produced by the backend's text-matching facility; the engine folds it into
/// a combined score but never exposes it.
#[derive(Debug, Clone)]
pub struct RankedDocument {
  /// The matched document.
  pub document: SearchDocument,
  /// Term-coverage relevance score, higher is better.
  pub relevance_rank: f64,
}

/// The read-only document-query capability the engine runs against.
///
/// Implementations provide two strategies over the same document set: a
/// ranked match against the normalized token query, and an unranked substring
/// scan used as the fallback. The `Send` and `Sync` bounds allow one store to
/// serve concurrent searches; the engine itself neither locks nor serializes
/// calls.
pub trait DocumentStore: Send + Sync {
  /// Returns the documents whose `name + subtitle + meta` text satisfies
  /// every term of `query` as a word prefix (AND semantics), together with
  /// their relevance ranks.
  ///
  /// Results are filtered by `kind` when given and capped at `limit`. An
  /// empty list means no document matched; it is not an error.
  fn query_ranked(
    &self,
    query: &TokenQuery,
    kind: Option<EntityKind>,
    limit: usize,
  ) -> Result<Vec<RankedDocument>, StoreError>;

  /// Returns the documents whose `name`, `subtitle`, or `meta` contains
  /// `raw_query` as a case-insensitive substring.
  ///
  /// Filtered by `kind` when given and capped at `limit`. No ordering is
  /// guaranteed; rows may come back in storage order.
  fn query_substring(
    &self,
    raw_query: &str,
    kind: Option<EntityKind>,
    limit: usize,
  ) -> Result<Vec<SearchDocument>, StoreError>;
}
