//! Retrieval Value Objects

use crate::error::{Error, Result};
use crate::value_objects::ChunkMetadata;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance function used by a vector store
///
/// Declared when the store is created and held fixed for its lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// `1 - cos(a, b)`; zero vectors are at distance 1 from everything
    #[default]
    Cosine,
    /// L2 distance
    Euclidean,
}

impl DistanceMetric {
    /// Distance between two vectors of equal length (smaller is nearer)
    pub fn distance(self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            Self::Cosine => {
                let (dot, norm_a, norm_b) = a
                    .iter()
                    .zip(b.iter())
                    .fold((0.0_f32, 0.0_f32, 0.0_f32), |(dot, na, nb), (&x, &y)| {
                        (dot + x * y, na + x * x, nb + y * y)
                    });
                if norm_a == 0.0 || norm_b == 0.0 {
                    1.0
                } else {
                    1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())
                }
            }
            Self::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f32>()
                .sqrt(),
        }
    }

    /// Lowercase metric name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(Self::Cosine),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            other => Err(Error::config(format!(
                "unknown distance metric '{other}' (expected cosine or euclidean)"
            ))),
        }
    }
}

/// A (text, vector, metadata) triple handed to a vector store
#[derive(Debug, Clone, PartialEq)]
pub struct VectorRecord {
    /// Caller-supplied id; the store assigns one when absent
    pub id: Option<String>,
    /// Chunk text
    pub text: String,
    /// Embedding vector
    pub vector: Vec<f32>,
    /// Chunk metadata
    pub metadata: ChunkMetadata,
}

impl VectorRecord {
    /// Create a record without an explicit id
    pub fn new(text: impl Into<String>, vector: Vec<f32>, metadata: ChunkMetadata) -> Self {
        Self {
            id: None,
            text: text.into(),
            vector,
            metadata,
        }
    }

    /// Attach an explicit id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A record the store refused to write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// Position of the record in the insert call
    pub index: usize,
    /// Why it was rejected
    pub reason: String,
}

/// Outcome of one insert call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertReport {
    /// Ids of the accepted records, in input order
    pub accepted: Vec<String>,
    /// Records that were not written
    pub rejected: Vec<RejectedRecord>,
}

impl InsertReport {
    /// Number of accepted records
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Number of rejected records
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Whether every record was written
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// One nearest-neighbour query result
///
/// Query results are ordered by ascending distance (nearest first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedEvidence {
    /// Record id
    pub id: String,
    /// Chunk text
    pub document: String,
    /// Chunk metadata
    pub metadata: ChunkMetadata,
    /// Distance to the query vector, when the backend reports one
    pub distance: Option<f32>,
}
