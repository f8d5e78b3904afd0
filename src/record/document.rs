//! Vector records and their builder
//!
//! A record couples a piece of text with its metadata and embedding. The
//! identifier is derived from the content alone, so inserting the same text
//! twice lands on the same key: re-insertion of identical text is idempotent,
//! and changing only metadata overwrites the prior record instead of creating
//! a new one.

use crate::record::value::{MetadataMap, MetadataValue};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Record construction errors
#[derive(Error, Debug)]
pub enum RecordError {
    /// Content was never set on the builder
    #[error("Record content must be set before build")]
    MissingContent,

    /// Metadata key or value failed validation
    #[error("Invalid metadata entry: {0}")]
    InvalidMetadata(String),

    /// Content file could not be read
    #[error("Failed to read content file: {0}")]
    Io(#[from] std::io::Error),
}

pub type RecordResult<T> = Result<T, RecordError>;

/// The unit of storage: identifier, metadata, source text and embedding
///
/// `id`, `metadata` and `content` are fixed at construction; only the
/// embedding is replaced, by the store when the record is added (and again if
/// it is re-added under a different provider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    id: String,
    metadata: MetadataMap,
    content: String,
    #[serde(default)]
    embedding: Vec<f32>,
}

impl VectorRecord {
    /// Start building a record
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Content-derived identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Metadata attached at construction
    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    /// Original text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Embedding vector; empty until the store's add step has run
    pub fn embedding(&self) -> &[f32] {
        &self.embedding
    }

    /// Replace the embedding
    pub fn set_embedding(&mut self, embedding: Vec<f32>) {
        self.embedding = embedding;
    }
}

impl fmt::Display for VectorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VectorRecord{{id: {}, metadata: {{", self.id)?;
        for (i, (key, value)) in self.metadata.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(
            f,
            "}}, content: {:?}, embedding: {} dims}}",
            self.content,
            self.embedding.len()
        )
    }
}

/// Identifier derivation: a pure function of the content only
fn derive_id(content: &str) -> String {
    format!("{:x}", Sha256::digest(content.as_bytes()))
}

/// Builder for [`VectorRecord`]
#[derive(Debug, Default)]
pub struct RecordBuilder {
    content: Option<String>,
    metadata: MetadataMap,
}

impl RecordBuilder {
    /// Attach a metadata entry
    ///
    /// Fails if the key is empty or the value is null.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> RecordResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(RecordError::InvalidMetadata(
                "key must not be empty".to_string(),
            ));
        }
        let value = value.into();
        if value.is_null() {
            return Err(RecordError::InvalidMetadata(
                "value must not be null".to_string(),
            ));
        }
        self.metadata.insert(key, value);
        Ok(self)
    }

    /// Set the record's text
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Read the record's text from a UTF-8 file, recording a `filename`
    /// metadata entry for provenance
    ///
    /// Binary document formats are not parsed here; callers extract text
    /// upstream and hand it to [`with_content`](Self::with_content).
    pub fn with_content_file(mut self, path: impl AsRef<Path>) -> RecordResult<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                RecordError::InvalidMetadata(format!("path {} has no file name", path.display()))
            })?;
        let content = std::fs::read_to_string(path)?;
        self.metadata
            .insert("filename".to_string(), MetadataValue::String(filename.to_string()));
        self.content = Some(content);
        Ok(self)
    }

    /// Finish the record, deriving its identifier from the content
    pub fn build(self) -> RecordResult<VectorRecord> {
        let content = self.content.ok_or(RecordError::MissingContent)?;
        let id = derive_id(&content);
        Ok(VectorRecord {
            id,
            metadata: self.metadata,
            content,
            embedding: Vec::new(),
        })
    }
}
