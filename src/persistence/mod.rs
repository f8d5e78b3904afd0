//! Persistence layer
//!
//! Durable put/get of records by identifier. The store writes every
//! successful insert through the backend, and explicit reload reads from it.
//! The reference implementation keeps one JSON document per record on the
//! local filesystem; remote backends plug in behind the same trait.

pub mod file;

pub use file::FileStorage;

use crate::record::VectorRecord;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure (permissions, disk full, missing directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable record storage keyed by identifier
///
/// The persisted encoding must be self-describing and field-tagged so that
/// records written before a schema addition still decode.
pub trait PersistenceBackend: Send + Sync {
    /// Durably store `record` under `id`, overwriting any existing entry
    fn put(&self, id: &str, record: &VectorRecord) -> StorageResult<()>;

    /// Load the record stored under `id`, or `None` if no entry exists
    fn get(&self, id: &str) -> StorageResult<Option<VectorRecord>>;
}
