//! Exact top-k retrieval over the record store
//!
//! Brute-force ranking: every indexed record is scored against the query, no
//! auxiliary index structure. O(n·d) per query for n records of d dimensions.

use crate::similarity::metrics::{Metric, MetricError, MetricResult};
use crate::store::RecordStore;
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;

/// Retrieval errors
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// A stored record could not be scored against the query
    #[error("Record {id}: {source}")]
    Record {
        id: String,
        #[source]
        source: MetricError,
    },

    /// The query vector itself was unusable
    #[error(transparent)]
    Metric(#[from] MetricError),
}

pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// A ranked hit: record identifier and its score under the chosen metric
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub score: f64,
}

/// Ranks indexed records against a query vector
pub struct Retriever {
    store: Arc<RecordStore>,
}

impl Retriever {
    /// Create a retriever reading from `store`
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Score every indexed record against `query` and return the top `k`.
    ///
    /// Similarity metrics sort descending, distance metrics ascending; ties
    /// keep insertion order. A stored embedding whose dimension disagrees
    /// with the query fails the whole call naming the offending record;
    /// mismatched records are never silently skipped. The ranking reflects a
    /// snapshot of the index taken at call time; concurrent mutation is not
    /// blocked.
    pub fn query(&self, query: &[f32], metric: Metric, k: usize) -> RetrievalResult<Vec<SearchHit>> {
        if query.is_empty() {
            return Err(MetricError::Empty.into());
        }

        let snapshot = self.store.snapshot();
        let mut hits = Vec::with_capacity(snapshot.len());
        for record in &snapshot {
            let score = metric
                .eval(query, record.embedding())
                .map_err(|source| RetrievalError::Record {
                    id: record.id().to_string(),
                    source,
                })?;
            hits.push(SearchHit {
                id: record.id().to_string(),
                score,
            });
        }

        rank(&mut hits, metric);
        hits.truncate(k);
        Ok(hits)
    }
}

/// Stable sort so equal scores keep the snapshot's insertion order
fn rank(hits: &mut [SearchHit], metric: Metric) {
    if metric.is_similarity() {
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    } else {
        hits.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    }
}

/// Score two vectors directly, without a store
///
/// Convenience wrapper over [`Metric::eval`] for callers holding raw vectors.
pub fn score(query: &[f32], candidate: &[f32], metric: Metric) -> MetricResult<f64> {
    metric.eval(query, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, score: f64) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            score,
        }
    }

    #[test]
    fn test_rank_similarity_descending() {
        let mut hits = vec![hit("a", 0.1), hit("b", 0.9), hit("c", 0.5)];
        rank(&mut hits, Metric::Cosine);
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_rank_distance_ascending() {
        let mut hits = vec![hit("a", 2.0), hit("b", 0.5), hit("c", 1.0)];
        rank(&mut hits, Metric::Euclidean);
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_rank_ties_keep_order() {
        let mut hits = vec![hit("first", 1.0), hit("second", 1.0), hit("third", 0.0)];
        rank(&mut hits, Metric::DotProduct);
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_score_wrapper() {
        let result = score(&[1.0, 0.0], &[1.0, 0.0], Metric::Cosine).unwrap();
        assert!((result - 1.0).abs() < 1e-6);
    }
}
