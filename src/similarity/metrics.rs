//! Distance metrics over embedding vectors
//!
//! Free pure functions, no instantiation ceremony. All four operate on two
//! equal-length vectors; a length disagreement is a contract violation and is
//! reported, never truncated away. Components are `f32` as stored,
//! accumulation and results are `f64`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Metric evaluation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// The two vectors have different lengths
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// One of the vectors is empty (an unembedded record, or no argument at all)
    #[error("Vectors must be non-empty")]
    Empty,

    /// Cosine similarity is undefined for a zero-norm vector
    #[error("Vectors must not have zero norm")]
    ZeroNorm,
}

pub type MetricResult<T> = Result<T, MetricError>;

fn check_dimensions(x: &[f32], y: &[f32]) -> MetricResult<()> {
    if x.is_empty() || y.is_empty() {
        return Err(MetricError::Empty);
    }
    if x.len() != y.len() {
        return Err(MetricError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    Ok(())
}

/// Dot product of two equal-length vectors
pub fn dot_product(x: &[f32], y: &[f32]) -> MetricResult<f64> {
    check_dimensions(x, y)?;
    Ok(x.iter()
        .zip(y.iter())
        .map(|(a, b)| f64::from(*a) * f64::from(*b))
        .sum())
}

/// Cosine similarity: dot product over the product of norms
///
/// Fails if either vector has zero norm, where the similarity is undefined.
pub fn cosine_similarity(x: &[f32], y: &[f32]) -> MetricResult<f64> {
    check_dimensions(x, y)?;
    let dot = dot_product(x, y)?;
    let norm_x = dot_product(x, x)?;
    let norm_y = dot_product(y, y)?;

    if norm_x == 0.0 || norm_y == 0.0 {
        return Err(MetricError::ZeroNorm);
    }

    Ok(dot / (norm_x.sqrt() * norm_y.sqrt()))
}

/// Euclidean (L2) distance between two equal-length vectors
pub fn euclidean_distance(x: &[f32], y: &[f32]) -> MetricResult<f64> {
    check_dimensions(x, y)?;
    let sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| {
            let diff = f64::from(*a) - f64::from(*b);
            diff * diff
        })
        .sum();
    Ok(sum.sqrt())
}

/// Manhattan (L1) distance between two equal-length vectors
pub fn manhattan_distance(x: &[f32], y: &[f32]) -> MetricResult<f64> {
    check_dimensions(x, y)?;
    Ok(x.iter()
        .zip(y.iter())
        .map(|(a, b)| (f64::from(*a) - f64::from(*b)).abs())
        .sum())
}

/// Metric selector for retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Dot product (similarity: higher ranks first)
    DotProduct,
    /// Cosine similarity (similarity: higher ranks first)
    Cosine,
    /// L2 distance (distance: lower ranks first)
    Euclidean,
    /// L1 distance (distance: lower ranks first)
    Manhattan,
}

impl Metric {
    /// Whether higher scores mean closer matches
    pub fn is_similarity(&self) -> bool {
        matches!(self, Metric::DotProduct | Metric::Cosine)
    }

    /// Evaluate this metric over two vectors
    pub fn eval(&self, x: &[f32], y: &[f32]) -> MetricResult<f64> {
        match self {
            Metric::DotProduct => dot_product(x, y),
            Metric::Cosine => cosine_similarity(x, y),
            Metric::Euclidean => euclidean_distance(x, y),
            Metric::Manhattan => manhattan_distance(x, y),
        }
    }
}
