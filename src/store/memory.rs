//! In-memory document store.
//!
//! The reference backend for tests and small deployments. Documents live in a
//! `Vec` in insertion order, which is also the "storage order" the substring
//! path exposes. Index maintenance (`upsert`, `remove`) is driven by external
//! entity-management flows; the engine itself only reads.

use crate::normalize::TokenQuery;
use crate::store::adapter::{DocumentStore, RankedDocument, StoreError};
use crate::types::{EntityId, EntityKind, SearchDocument};
use unicode_segmentation::UnicodeSegmentation;

/// In-memory store backed by an insertion-ordered `Vec`.
pub struct InMemDocumentStore {
    documents: Vec<SearchDocument>,
}

impl InMemDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Adds a document, replacing any existing one with the same kind and id.
    pub fn upsert(&mut self, document: SearchDocument) {
        let key = (document.entity_kind, document.id.clone());
        match self
            .documents
            .iter_mut()
            .find(|d| (d.entity_kind, d.id.as_str()) == (key.0, key.1.as_str()))
        {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    /// Removes a document by kind and id. Unknown ids are ignored.
    pub fn remove(&mut self, kind: EntityKind, id: &EntityId) {
        self.documents
            .retain(|d| !(d.entity_kind == kind && &d.id == id));
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for InMemDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The concatenated text a document is matched against.
fn searchable_text(document: &SearchDocument) -> String {
    let mut text = document.name.clone();
    if let Some(subtitle) = &document.subtitle {
        text.push(' ');
        text.push_str(subtitle);
    }
    if let Some(meta) = &document.meta {
        text.push(' ');
        text.push_str(meta);
    }
    text
}

/// Splits document text into lowercase words.
fn words(text: &str) -> Vec<String> {
    text.unicode_words().map(|word| word.to_lowercase()).collect()
}

/// Term-coverage relevance for an AND-of-prefixes match, in `(0, 1]`.
///
/// Each term contributes its best prefix ratio against the document's words
/// (an exact word scores 1.0, a short prefix of a long word less). The mean
/// term score is damped by how much of the document the query covers, so a
/// query that accounts for most of a short name outranks the same terms lost
/// in a long one. Returns `None` when any term matches no word.
fn coverage_rank(terms: &[String], doc_words: &[String]) -> Option<f64> {
    let mut total = 0.0;
    for term in terms {
        let term_len = term.chars().count() as f64;
        let best = doc_words
            .iter()
            .filter(|word| word.starts_with(term.as_str()))
            .map(|word| term_len / word.chars().count() as f64)
            .fold(0.0_f64, f64::max);
        if best == 0.0 {
            return None;
        }
        total += best;
    }

    let term_score = total / terms.len() as f64;
    let coverage = (terms.len() as f64 / doc_words.len() as f64).min(1.0);
    Some(term_score * (0.5 + 0.5 * coverage))
}

impl DocumentStore for InMemDocumentStore {
    fn query_ranked(
        &self,
        query: &TokenQuery,
        kind: Option<EntityKind>,
        limit: usize,
    ) -> Result<Vec<RankedDocument>, StoreError> {
        let mut matches: Vec<RankedDocument> = self
            .documents
            .iter()
            .filter(|d| kind.map_or(true, |k| d.entity_kind == k))
            .filter_map(|d| {
                let doc_words = words(&searchable_text(d));
                coverage_rank(query.terms(), &doc_words).map(|rank| RankedDocument {
                    document: d.clone(),
                    relevance_rank: rank,
                })
            })
            .collect();

        // Rank descending, name ascending: identical inputs always return
        // identical rows, even across the truncation boundary.
        matches.sort_by(|a, b| {
            b.relevance_rank
                .partial_cmp(&a.relevance_rank)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.document
                        .name
                        .to_lowercase()
                        .cmp(&b.document.name.to_lowercase())
                })
        });
        matches.truncate(limit);

        Ok(matches)
    }

    fn query_substring(
        &self,
        raw_query: &str,
        kind: Option<EntityKind>,
        limit: usize,
    ) -> Result<Vec<SearchDocument>, StoreError> {
        let needle = raw_query.to_lowercase();

        let matches: Vec<SearchDocument> = self
            .documents
            .iter()
            .filter(|d| kind.map_or(true, |k| d.entity_kind == k))
            .filter(|d| {
                d.name.to_lowercase().contains(&needle)
                    || d.subtitle
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(&needle))
                    || d.meta
                        .as_deref()
                        .is_some_and(|m| m.to_lowercase().contains(&needle))
            })
            .take(limit)
            .cloned()
            .collect();

        Ok(matches)
    }
}
