//! Vector database access for the gateway.
//!
//! This crate provides:
//! - [`QdrantSettings`]: connection settings read from the environment
//! - [`VectorStore`]: the operations the HTTP layer relies on
//! - [`QdrantFacade`]: the Qdrant-backed implementation
//!
//! The HTTP layer only sees the trait and the plain records below, never
//! `qdrant-client` types.

mod config;
mod errors;
mod qdrant_facade;
mod record;
mod store;

pub use config::{DEFAULT_QDRANT_URL, QdrantSettings};
pub use errors::VectorStoreError;
pub use qdrant_facade::QdrantFacade;
pub use record::{
    CollectionSpec, Distance, Payload, PointKey, PointRecord, ScoredHit, SearchQuery,
};
pub use store::VectorStore;
