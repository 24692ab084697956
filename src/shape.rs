//! Shapes both match paths into the canonical [`SearchResult`].
//!
//! The primary and fallback paths produce different row shapes
//! ([`RankedCandidate`] and [`SearchDocument`]); everything leaving the engine
//! goes through here so callers never branch on path-specific fields, and
//! ranking internals (relevance rank, combined score, popularity score) never
//! escape.

use crate::order::RankedCandidate;
use crate::types::{SearchDocument, SearchResult};

impl From<SearchDocument> for SearchResult {
  fn from(document: SearchDocument) -> Self {
    Self {
      id: document.id,
      entity_kind: document.entity_kind,
      slug: document.slug,
      name: document.name,
      subtitle: document.subtitle,
      meta: document.meta,
    }
  }
}

/// Shapes a primary-path candidate, dropping its scores.
pub(crate) fn from_ranked(candidate: RankedCandidate) -> SearchResult {
  candidate.document.into()
}

/// Shapes a fallback-path document.
pub(crate) fn from_document(document: SearchDocument) -> SearchResult {
  document.into()
}
