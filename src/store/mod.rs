//! Concurrent record store with write-through persistence
//!
//! The index maps content-derived identifiers to records and is safe for
//! concurrent use from multiple threads. Individual key operations are
//! atomic; iteration for retrieval sees a consistent snapshot per call
//! without blocking writers, so results can be stale by the time they are
//! returned.
//!
//! `add` runs embed → index → persist per record. The embedding call and the
//! persistence write are external I/O and happen outside any lock; a slow
//! provider or backend stalls only the record it is working on.

use crate::embed::{EmbedError, EmbeddingProvider};
use crate::persistence::{PersistenceBackend, StorageError, StorageResult};
use crate::record::VectorRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, info};

/// Store errors, always naming the record they occurred on
#[derive(Error, Debug)]
pub enum StoreError {
    /// The embedding provider failed for this record
    #[error("Embedding failed for record {id}: {source}")]
    Embedding {
        id: String,
        #[source]
        source: EmbedError,
    },

    /// The persistence backend failed for this record
    #[error("Persistence failed for record {id}: {source}")]
    Persistence {
        id: String,
        #[source]
        source: StorageError,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// How `add` treats a record that fails to embed or persist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddPolicy {
    /// Stop at the first failure; earlier records stay committed
    #[default]
    FailFast,
    /// Keep going past failures and report all of them at the end
    ReportAndContinue,
}

/// Outcome of a batch `add`
///
/// Under `FailFast` a failing batch returns `Err` instead, so `failures`
/// is only ever populated under `ReportAndContinue`.
#[derive(Debug, Default)]
pub struct AddReport {
    /// Identifiers committed to the index and persisted, in batch order
    pub added: Vec<String>,
    /// Per-record failures the batch continued past
    pub failures: Vec<StoreError>,
}

/// Concurrent in-memory index with write-through persistence
pub struct RecordStore {
    /// Insertion-ordered index; order backs the retriever's tie-break
    index: RwLock<IndexMap<String, VectorRecord>>,
    provider: RwLock<Arc<dyn EmbeddingProvider>>,
    backend: Arc<dyn PersistenceBackend>,
    policy: AddPolicy,
}

impl RecordStore {
    /// Create a store with the default fail-fast batch policy
    pub fn new(provider: Arc<dyn EmbeddingProvider>, backend: Arc<dyn PersistenceBackend>) -> Self {
        Self::with_policy(provider, backend, AddPolicy::default())
    }

    /// Create a store with an explicit batch policy
    pub fn with_policy(
        provider: Arc<dyn EmbeddingProvider>,
        backend: Arc<dyn PersistenceBackend>,
        policy: AddPolicy,
    ) -> Self {
        Self {
            index: RwLock::new(IndexMap::new()),
            provider: RwLock::new(provider),
            backend,
            policy,
        }
    }

    /// Replace the embedding provider
    ///
    /// Records already indexed keep their embeddings until re-added, at
    /// which point the new provider's vector overwrites the old one.
    pub fn set_provider(&self, provider: Arc<dyn EmbeddingProvider>) {
        *self.provider.write().unwrap() = provider;
    }

    /// Embed, index and persist each record, in the given order.
    ///
    /// Insertion under an identifier already present overwrites the stored
    /// record (last writer wins). The batch is not atomic: a failure leaves
    /// earlier records committed and visible. Under the default fail-fast
    /// policy the first failure is returned; under
    /// [`AddPolicy::ReportAndContinue`] every failure is collected into the
    /// report instead.
    pub fn add(&self, records: Vec<VectorRecord>) -> StoreResult<AddReport> {
        let mut report = AddReport::default();
        for mut record in records {
            info!("Embedding record with id: {}", record.id());
            match self.process(&mut record) {
                Ok(()) => report.added.push(record.id().to_string()),
                Err(err) => match self.policy {
                    AddPolicy::FailFast => return Err(err),
                    AddPolicy::ReportAndContinue => report.failures.push(err),
                },
            }
        }
        Ok(report)
    }

    fn process(&self, record: &mut VectorRecord) -> StoreResult<()> {
        // Embedding runs unlocked; only the map insert takes the write lock.
        let provider = Arc::clone(&*self.provider.read().unwrap());
        let embedding = provider.embed(record).map_err(|source| StoreError::Embedding {
            id: record.id().to_string(),
            source,
        })?;
        record.set_embedding(embedding);

        let id = record.id().to_string();
        {
            let mut index = self.index.write().unwrap();
            index.insert(id.clone(), record.clone());
        }
        debug!("Record {} inserted into index", id);

        self.backend
            .put(&id, record)
            .map_err(|source| StoreError::Persistence { id, source })
    }

    /// Look up a record in the in-memory index
    ///
    /// Does not fall through to the persistence backend; use
    /// [`get_from_persistence`](Self::get_from_persistence) for an explicit
    /// reload.
    pub fn get(&self, id: &str) -> Option<VectorRecord> {
        self.index.read().unwrap().get(id).cloned()
    }

    /// Load a record from the persistence backend, bypassing the index
    pub fn get_from_persistence(&self, id: &str) -> StorageResult<Option<VectorRecord>> {
        self.backend.get(id)
    }

    /// Remove each id from the in-memory index.
    ///
    /// Absent ids are a no-op, never an error; deletion is idempotent and
    /// always completes. Persisted copies are left in place, so the
    /// persisted set may outgrow the index.
    pub fn delete(&self, ids: &[String]) -> bool {
        let mut index = self.index.write().unwrap();
        for id in ids {
            if index.shift_remove(id).is_some() {
                debug!("Record {} removed from index", id);
            }
        }
        true
    }

    /// Clone the records currently indexed, in insertion order.
    ///
    /// Consistent for this call; concurrent mutation proceeds and may not be
    /// reflected.
    pub fn snapshot(&self) -> Vec<VectorRecord> {
        self.index.read().unwrap().values().cloned().collect()
    }

    /// Identifiers currently indexed, in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.index.read().unwrap().keys().cloned().collect()
    }

    /// Number of records currently indexed
    pub fn len(&self) -> usize {
        self.index.read().unwrap().len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.read().unwrap().is_empty()
    }
}
