//! The search engine: primary ranked matching with a substring fallback.

use crate::analytics::{SearchEvent, UsageRecorder};
use crate::error::SearchError;
use crate::normalize::normalize;
use crate::order::{order_candidates, RankedCandidate};
use crate::popularity::PopularityPrior;
use crate::shape;
use crate::store::DocumentStore;
use crate::types::{EntityKind, SearchRequest, SearchResult};

/// Scale applied to the store's `[0, ~1]` relevance rank before the
/// popularity prior is added.
///
/// At this scale popularity (typically in the low hundreds for the most
/// prominent players) acts as a tie-breaker among near-equal lexical matches
/// rather than overriding a materially higher relevance score. The value is
/// carried over from production and has not been tuned; it is exposed and
/// test-covered rather than silently rebalanced.
pub const RELEVANCE_WEIGHT: f64 = 100.0;

/// Ranked entity search over a [`DocumentStore`].
///
/// Each call to [`search`](SearchEngine::search) is independent, read-only,
/// and stateless; one engine can serve concurrent callers. Cancellation and
/// debouncing are caller concerns, as is bounding the store round-trip with a
/// timeout.
///
/// # Examples
///
/// ```rust
/// use pitchside::prelude::*;
///
/// let mut store = InMemDocumentStore::new();
/// store.upsert(
///   SearchDocument::new(EntityKind::Player, "p1", "erling-haaland", "Erling Haaland")
///     .with_subtitle("Manchester City")
///     .with_popularity(88.0),
/// );
///
/// let engine = SearchEngine::new(Box::new(store));
/// let results = engine.search(&SearchRequest::new("Haaland")).unwrap();
/// assert_eq!(results[0].name, "Erling Haaland");
/// ```
pub struct SearchEngine {
  store: Box<dyn DocumentStore>,
  prior: PopularityPrior,
  recorder: Option<Box<dyn UsageRecorder>>,
}

impl SearchEngine {
  /// Creates an engine over the given store with the default popularity
  /// table and no usage recorder.
  pub fn new(store: Box<dyn DocumentStore>) -> Self {
    Self {
      store,
      prior: PopularityPrior::default(),
      recorder: None,
    }
  }

  /// Replaces the popularity prior table.
  pub fn with_prior(mut self, prior: PopularityPrior) -> Self {
    self.prior = prior;
    self
  }

  /// Attaches a usage recorder for [`record_search`](SearchEngine::record_search).
  pub fn with_recorder(mut self, recorder: Box<dyn UsageRecorder>) -> Self {
    self.recorder = Some(recorder);
    self
  }

  /// Executes a search and returns a single ranked list spanning all entity
  /// kinds (or one kind, when the request carries a filter).
  ///
  /// ## Lifecycle
  ///
  /// 1. The raw query is trimmed and normalized into an AND-of-prefix-terms
  ///    token query.
  /// 2. The primary path asks the store for ranked matches, folds the
  ///    popularity prior into each relevance rank
  ///    (`rank * RELEVANCE_WEIGHT + prior`), applies the deterministic
  ///    tie-break order, and truncates to the request limit.
  /// 3. When the primary path yields nothing, a case-insensitive substring
  ///    scan of the raw query runs instead. Fallback rows keep the store's
  ///    own order; no ranking is guaranteed on that path. The fallback never
  ///    runs when a kind filter merely narrowed a nonzero primary result set
  ///    to zero.
  /// 4. Either path's rows are shaped into [`SearchResult`], which carries no
  ///    ranking internals.
  ///
  /// Returns `Ok(vec![])` for every flavor of "nothing found", including a
  /// query that normalizes to zero tokens. Store failures propagate as
  /// [`SearchError::StoreUnavailable`]; they are never degraded to an empty
  /// list.
  pub fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, SearchError> {
    if request.limit == 0 {
      return Err(SearchError::InvalidLimit);
    }

    let trimmed = request.raw_query.trim();
    if trimmed.is_empty() {
      return Ok(Vec::new());
    }

    let token_query = match normalize(&request.raw_query) {
      Some(query) => query,
      // Tokenization dropped every character (punctuation-only input); the
      // substring scan may still find the entity.
      None => return self.fallback(trimmed, request),
    };

    let ranked = self
      .store
      .query_ranked(&token_query, request.entity_kind, request.limit)?;

    if ranked.is_empty() {
      if request.entity_kind.is_some() {
        // A nonzero primary result set narrowed to zero by the kind filter
        // is a final empty result, not a fallback trigger.
        let unfiltered = self.store.query_ranked(&token_query, None, 1)?;
        if !unfiltered.is_empty() {
          return Ok(Vec::new());
        }
      }
      return self.fallback(trimmed, request);
    }

    let mut candidates: Vec<RankedCandidate> = ranked
      .into_iter()
      .map(|row| {
        let prior = self.prior.prior_of(&row.document);
        RankedCandidate::new(row, RELEVANCE_WEIGHT, prior)
      })
      .collect();

    order_candidates(&mut candidates, trimmed);
    candidates.truncate(request.limit);

    Ok(candidates.into_iter().map(shape::from_ranked).collect())
  }

  /// Secondary match strategy: substring scan of the raw, untokenized query.
  fn fallback(
    &self,
    trimmed_query: &str,
    request: &SearchRequest,
  ) -> Result<Vec<SearchResult>, SearchError> {
    let mut documents =
      self
        .store
        .query_substring(trimmed_query, request.entity_kind, request.limit)?;
    documents.truncate(request.limit);

    Ok(documents.into_iter().map(shape::from_document).collect())
  }

  /// Records a completed search with the configured usage recorder.
  ///
  /// Fire-and-forget: recorder failures are logged and swallowed, never
  /// surfaced to the caller. A no-op when no recorder is attached.
  pub fn record_search(
    &self,
    raw_query: &str,
    result_count: usize,
    entity_kind: Option<EntityKind>,
  ) {
    let Some(recorder) = &self.recorder else {
      return;
    };

    let event = SearchEvent {
      raw_query: raw_query.to_string(),
      result_count,
      entity_kind,
    };

    if let Err(error) = recorder.record(&event) {
      log::warn!(target: "pitchside::usage", "usage recording failed: {error}");
    }
  }
}
