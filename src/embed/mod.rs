//! Embedding providers
//!
//! The store consumes embeddings through one abstract operation; the actual
//! computation (a remote API, a local model) lives behind it and is swapped
//! without touching the store. A provider failure means "no embedding
//! produced"; the store decides what to do with it, never this layer.

use crate::record::VectorRecord;
use thiserror::Error;
use tracing::debug;

/// Embedding errors
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Opaque failure from the underlying provider
    #[error("Embedding provider error: {0}")]
    Provider(String),

    /// Record text was empty; no embedding can be produced from it
    #[error("Record {0} has empty content")]
    EmptyContent(String),
}

pub type EmbedResult<T> = Result<T, EmbedError>;

/// Maps a record's text to a fixed-length vector
///
/// Implementations may block on an external system; the store never holds a
/// lock across this call.
pub trait EmbeddingProvider: Send + Sync {
    fn embed(&self, record: &VectorRecord) -> EmbedResult<Vec<f32>>;
}

/// Provider returning the same configured vector for every record
///
/// Stand-in for a real model: fallback setups, demos and tests.
#[derive(Debug, Clone)]
pub struct FixedEmbedding {
    vector: Vec<f32>,
}

impl FixedEmbedding {
    pub fn new(vector: Vec<f32>) -> Self {
        Self { vector }
    }
}

impl EmbeddingProvider for FixedEmbedding {
    fn embed(&self, record: &VectorRecord) -> EmbedResult<Vec<f32>> {
        if record.content().is_empty() {
            return Err(EmbedError::EmptyContent(record.id().to_string()));
        }
        debug!("Fixed embedding for record {}", record.id());
        Ok(self.vector.clone())
    }
}
