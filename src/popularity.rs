//! Per-kind popularity priors.
//!
//! Only players carry a prominence score today. That asymmetry is intentional,
//! so it is modeled as a strategy table keyed by [`EntityKind`] with a zero
//! default rather than an inline conditional: a future kind opts in with one
//! [`with_prior`](PopularityPrior::with_prior) call and the ranking logic never
//! changes.

use crate::types::{EntityKind, SearchDocument};
use std::collections::HashMap;

/// A prior function for one entity kind.
pub type PriorFn = fn(&SearchDocument) -> f64;

/// Maps entity kinds to their popularity prior; kinds without an entry rank
/// as zero.
#[derive(Debug, Clone)]
pub struct PopularityPrior {
    priors: HashMap<EntityKind, PriorFn>,
}

fn carried_score(document: &SearchDocument) -> f64 {
    document.popularity_score.unwrap_or(0.0)
}

impl Default for PopularityPrior {
    /// The production table: players read their document-carried score, every
    /// other kind ranks as zero.
    fn default() -> Self {
        Self::empty().with_prior(EntityKind::Player, carried_score)
    }
}

impl PopularityPrior {
    /// A table with no entries; every kind ranks as zero.
    pub fn empty() -> Self {
        Self {
            priors: HashMap::new(),
        }
    }

    /// Registers a prior for one kind, replacing any previous entry.
    pub fn with_prior(mut self, kind: EntityKind, prior: PriorFn) -> Self {
        self.priors.insert(kind, prior);
        self
    }

    /// The popularity prior for a document. Nonnegative; kinds without a
    /// registered prior return zero.
    pub fn prior_of(&self, document: &SearchDocument) -> f64 {
        self
            .priors
            .get(&document.entity_kind)
            .map(|prior| prior(document))
            .unwrap_or(0.0)
            .max(0.0)
    }
}
