//! Document store adapters for Pitchside.

pub mod adapter;
pub mod memory;

pub use adapter::{DocumentStore, RankedDocument, StoreError};
pub use memory::InMemDocumentStore;
