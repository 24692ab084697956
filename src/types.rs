//! Core data types for the Pitchside search engine.

use serde::{Deserialize, Serialize};

/// Type alias for entity identifiers.
///
/// Identifiers are opaque to the engine; they only need to be unique within
/// their [`EntityKind`]. Using a dedicated alias makes it easier to change the
/// underlying type in the future if needed.
pub type EntityId = String;

/// Default number of results returned when a request does not set a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// The closed set of entity kinds the site indexes.
///
/// Adding a kind is a deliberate extension point: the ranking pipeline never
/// branches on a specific kind, so a new variant only needs an entry in the
/// popularity table (see [`PopularityPrior`](crate::popularity::PopularityPrior))
/// if it carries a prominence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
  /// An individual player.
  Player,
  /// A club or national team.
  Team,
  /// A league, cup, or tournament.
  Competition,
  /// A stadium or ground.
  Venue,
}

/// The indexed text representation of one entity.
///
/// Documents are a read-only projection maintained by the entity-management
/// flows; the engine only queries them. For a given `entity_kind`, both `id`
/// and `slug` are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDocument {
  /// Opaque identifier, unique within its kind.
  pub id: EntityId,
  /// Which kind of entity this document describes.
  pub entity_kind: EntityKind,
  /// URL-safe identifier, stable and unique within its kind.
  pub slug: String,
  /// Primary display string. Never empty.
  pub name: String,
  /// Optional secondary string, e.g. a player's team name.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subtitle: Option<String>,
  /// Optional freeform string, e.g. position and nationality.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meta: Option<String>,
  /// Precomputed prominence score. Defined only for players today; every
  /// other kind carries `None` and ranks as zero.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub popularity_score: Option<f64>,
}

impl SearchDocument {
  /// Creates a document with the required fields and no optional text.
  pub fn new(
    entity_kind: EntityKind,
    id: impl Into<EntityId>,
    slug: impl Into<String>,
    name: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      entity_kind,
      slug: slug.into(),
      name: name.into(),
      subtitle: None,
      meta: None,
      popularity_score: None,
    }
  }

  /// Sets the secondary display string.
  pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
    self.subtitle = Some(subtitle.into());
    self
  }

  /// Sets the freeform metadata string.
  pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
    self.meta = Some(meta.into());
    self
  }

  /// Sets the precomputed popularity score.
  pub fn with_popularity(mut self, score: f64) -> Self {
    self.popularity_score = Some(score);
    self
  }
}

/// A single search request.
///
/// `limit` must be positive; [`search`](crate::engine::SearchEngine::search)
/// rejects zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
  /// The raw, unprocessed user text.
  pub raw_query: String,
  /// Restricts results to one entity kind when set.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entity_kind: Option<EntityKind>,
  /// Maximum number of results to return.
  #[serde(default = "default_limit")]
  pub limit: usize,
}

fn default_limit() -> usize {
  DEFAULT_LIMIT
}

impl SearchRequest {
  /// Creates a request for the given query text with the default limit.
  pub fn new(raw_query: impl Into<String>) -> Self {
    Self {
      raw_query: raw_query.into(),
      entity_kind: None,
      limit: DEFAULT_LIMIT,
    }
  }

  /// Restricts the request to a single entity kind.
  pub fn for_kind(mut self, kind: EntityKind) -> Self {
    self.entity_kind = Some(kind);
    self
  }

  /// Sets the maximum number of results.
  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = limit;
    self
  }
}

/// The caller-facing projection of a matched document.
///
/// Ranking internals (relevance rank, combined score, popularity score) are
/// deliberately absent; both the primary and the fallback path are shaped into
/// this one type before anything leaves the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
  /// Opaque identifier, unique within its kind.
  pub id: EntityId,
  /// Which kind of entity matched.
  pub entity_kind: EntityKind,
  /// URL-safe identifier for building links.
  pub slug: String,
  /// Primary display string.
  pub name: String,
  /// Optional secondary string.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subtitle: Option<String>,
  /// Optional freeform string.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meta: Option<String>,
}
