//! Record validation and brute-force nearest-neighbour selection shared by
//! the vector stores.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use qag_domain::error::{Error, Result};
use qag_domain::value_objects::{
    ChunkMetadata, DistanceMetric, MetadataFilter, RejectedRecord, RetrievedEvidence,
    VectorRecord,
};

/// A record as held by a store, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StoredRecord {
    pub id: String,
    pub text: String,
    pub vector: Vec<f32>,
    pub metadata: ChunkMetadata,
}

impl StoredRecord {
    fn to_evidence(&self, distance: f32) -> RetrievedEvidence {
        RetrievedEvidence {
            id: self.id.clone(),
            document: self.text.clone(),
            metadata: self.metadata.clone(),
            distance: Some(distance),
        }
    }
}

/// Split an insert batch into storable records and rejections
///
/// Records of the wrong dimension, with non-finite components or with an
/// id that already exists are rejected; missing ids are generated.
pub(crate) fn admit(
    records: Vec<VectorRecord>,
    dimensions: usize,
    existing: &[StoredRecord],
) -> (Vec<StoredRecord>, Vec<RejectedRecord>) {
    let taken: HashSet<&str> = existing.iter().map(|r| r.id.as_str()).collect();
    let mut fresh_ids: HashSet<String> = HashSet::new();
    let mut admitted = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let reason = if record.vector.len() == dimensions {
            if record.vector.iter().all(|v| v.is_finite()) {
                None
            } else {
                Some("vector contains non-finite values".to_string())
            }
        } else {
            Some(format!(
                "dimension mismatch: expected {dimensions}, got {}",
                record.vector.len()
            ))
        };
        if let Some(reason) = reason {
            rejected.push(RejectedRecord { index, reason });
            continue;
        }

        let id = record
            .id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        if taken.contains(id.as_str()) || fresh_ids.contains(&id) {
            rejected.push(RejectedRecord {
                index,
                reason: format!("duplicate id '{id}'"),
            });
            continue;
        }
        fresh_ids.insert(id.clone());

        admitted.push(StoredRecord {
            id,
            text: record.text,
            vector: record.vector,
            metadata: record.metadata,
        });
    }
    (admitted, rejected)
}

/// Reject a query vector of the wrong dimension
pub(crate) fn check_query_vector(vector: &[f32], dimensions: usize) -> Result<()> {
    if vector.len() == dimensions {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected: dimensions,
            actual: vector.len(),
        })
    }
}

/// Candidate for heap-based top-k selection
///
/// Ordered by distance, then by insertion position, so the heap's maximum
/// is the candidate to evict first.
struct Candidate {
    distance: f32,
    position: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.position.cmp(&other.position))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `k` records matching `filter` nearest to `query`, nearest first
pub(crate) fn nearest(
    records: &[StoredRecord],
    query: &[f32],
    k: usize,
    filter: &MetadataFilter,
    metric: DistanceMetric,
) -> Vec<RetrievedEvidence> {
    if k == 0 {
        return Vec::new();
    }

    // O(n log k) with a bounded max-heap
    let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);
    for (position, record) in records.iter().enumerate() {
        if !filter.matches(&record.metadata) {
            continue;
        }
        heap.push(Candidate {
            distance: metric.distance(query, &record.vector),
            position,
        });
        if heap.len() > k {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|c| records[c.position].to_evidence(c.distance))
        .collect()
}
