//! Pitchside - ranked entity search for a sports-data content site.
//!
//! Given free text, Pitchside returns a single ranked list spanning four
//! entity kinds (players, teams, competitions, venues), blending lexical
//! relevance with an entity-specific popularity prior, applying deterministic
//! tie-breaks, and degrading to a substring scan when strict tokenized
//! matching finds nothing.

pub mod analytics;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod order;
pub mod popularity;
pub mod shape;
pub mod store;
pub mod types;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::analytics::*;
  pub use crate::engine::*;
  pub use crate::error::*;
  pub use crate::normalize::*;
  pub use crate::order::*;
  pub use crate::popularity::*;
  pub use crate::store::*;
  pub use crate::types::*;
}
