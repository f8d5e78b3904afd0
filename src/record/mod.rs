//! Record data model
//!
//! The stored unit is a [`VectorRecord`]: text plus metadata plus embedding,
//! keyed by an identifier derived from the text itself. Records are built
//! through [`RecordBuilder`], which validates its inputs up front.

pub mod document;
pub mod value;

pub use document::{RecordBuilder, RecordError, RecordResult, VectorRecord};
pub use value::{MetadataMap, MetadataValue};
