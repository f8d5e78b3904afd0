//! Vectorspace
//!
//! A minimal embedding store: text records carry a content-derived
//! identifier, caller-supplied metadata and an embedding vector, live in a
//! concurrent in-memory index, and are written through to durable storage on
//! insert. A companion set of distance metrics ranks stored vectors against
//! a query for exact, brute-force top-k retrieval.
//!
//! # Architecture
//!
//! - [`record`]: the data model, a [`VectorRecord`] built through a
//!   validating builder, with a metadata map of open-ended values.
//! - [`embed`]: the [`EmbeddingProvider`] abstraction the store calls to
//!   turn text into vectors; implementations are interchangeable.
//! - [`store`]: the concurrent index plus the embed → index → persist
//!   orchestration. Deletion is index-only; persisted copies survive it.
//! - [`persistence`]: durable put/get behind [`PersistenceBackend`], with a
//!   file-based JSON reference implementation.
//! - [`similarity`]: pure distance metrics and the brute-force
//!   [`Retriever`].
//!
//! # Example Usage
//!
//! ```rust
//! use vectorspace::{FileStorage, FixedEmbedding, Metric, RecordStore, Retriever, VectorRecord};
//! use std::sync::Arc;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let storage = FileStorage::open(dir.path()).unwrap();
//! let provider = FixedEmbedding::new(vec![0.5, 0.5]);
//! let store = Arc::new(RecordStore::new(Arc::new(provider), Arc::new(storage)));
//!
//! let record = VectorRecord::builder()
//!     .with_content("an example passage")
//!     .with_metadata("source", "docs").unwrap()
//!     .build().unwrap();
//! let id = record.id().to_string();
//!
//! store.add(vec![record]).unwrap();
//! assert_eq!(store.get(&id).unwrap().embedding(), [0.5, 0.5]);
//!
//! let retriever = Retriever::new(Arc::clone(&store));
//! let hits = retriever.query(&[0.5, 0.5], Metric::Cosine, 1).unwrap();
//! assert_eq!(hits[0].id, id);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod embed;
pub mod persistence;
pub mod record;
pub mod similarity;
pub mod store;

// Re-export main types for convenience
pub use embed::{EmbedError, EmbedResult, EmbeddingProvider, FixedEmbedding};

pub use persistence::{FileStorage, PersistenceBackend, StorageError, StorageResult};

pub use record::{
    MetadataMap, MetadataValue, RecordBuilder, RecordError, RecordResult, VectorRecord,
};

pub use similarity::{
    cosine_similarity, dot_product, euclidean_distance, manhattan_distance, Metric, MetricError,
    MetricResult, RetrievalError, RetrievalResult, Retriever, SearchHit,
};

pub use store::{AddPolicy, AddReport, RecordStore, StoreError, StoreResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
