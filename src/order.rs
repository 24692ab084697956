//! Deterministic ordering of primary-path candidates.
//!
//! The fallback path deliberately carries no such guarantee; this total order
//! applies to ranked candidates only.

use crate::store::RankedDocument;
use crate::types::SearchDocument;
use std::cmp::Ordering;

/// A primary-path candidate with its blended score.
///
/// One of the two internal row shapes; see
/// [`shape`](crate::shape) for the single caller-facing projection.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
  /// The matched document.
  pub document: SearchDocument,
  /// The store's opaque relevance score.
  pub relevance_rank: f64,
  /// `relevance_rank * RELEVANCE_WEIGHT + popularity prior`.
  pub combined_score: f64,
}

impl RankedCandidate {
  /// Folds a popularity prior into a ranked store row.
  pub fn new(ranked: RankedDocument, relevance_weight: f64, prior: f64) -> Self {
    let combined_score = ranked.relevance_rank * relevance_weight + prior;
    Self {
      document: ranked.document,
      relevance_rank: ranked.relevance_rank,
      combined_score,
    }
  }
}

/// Match bucket against the trimmed raw query. Lower sorts first.
fn bucket(name: &str, query_lower: &str) -> u8 {
  let name_lower = name.to_lowercase();
  if name_lower == query_lower {
    0
  } else if name_lower.starts_with(query_lower) {
    1
  } else {
    2
  }
}

/// Imposes the total order on primary-path candidates:
///
/// 1. name equals the trimmed raw query, case-insensitively;
/// 2. name starts with the trimmed raw query;
/// 3. combined score, descending;
/// 4. name ascending, case-insensitively.
///
/// Stable and reproducible for identical inputs against an unchanged
/// document set.
pub fn order_candidates(candidates: &mut [RankedCandidate], trimmed_query: &str) {
  let query_lower = trimmed_query.to_lowercase();

  candidates.sort_by(|a, b| {
    bucket(&a.document.name, &query_lower)
      .cmp(&bucket(&b.document.name, &query_lower))
      .then_with(|| {
        b.combined_score
          .partial_cmp(&a.combined_score)
          .unwrap_or(Ordering::Equal)
      })
      .then_with(|| {
        a.document
          .name
          .to_lowercase()
          .cmp(&b.document.name.to_lowercase())
      })
  });
}
