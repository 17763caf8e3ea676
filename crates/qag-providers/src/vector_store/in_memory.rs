//! In-memory vector store provider implementation
//!
//! Provides an in-memory vector storage backend for development and testing.
//! Data is not persisted and will be lost on restart.

use async_trait::async_trait;
use qag_domain::error::Result;
use qag_domain::ports::providers::{VectorStoreAdmin, VectorStoreProvider};
use qag_domain::value_objects::{
    DistanceMetric, InsertReport, MetadataFilter, RetrievedEvidence, VectorRecord,
};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::scan::{StoredRecord, admit, check_query_vector, nearest};

/// In-memory vector store provider
///
/// Records live in one insertion-ordered vector behind an async `RwLock`:
/// an insert batch becomes visible to queries all at once.
pub struct InMemoryVectorStoreProvider {
    dimensions: usize,
    metric: DistanceMetric,
    records: RwLock<Vec<StoredRecord>>,
}

impl InMemoryVectorStoreProvider {
    /// Create an empty store for vectors of `dimensions` elements
    pub fn new(dimensions: usize, metric: DistanceMetric) -> Self {
        Self {
            dimensions,
            metric,
            records: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl VectorStoreAdmin for InMemoryVectorStoreProvider {
    async fn count(&self, filter: &MetadataFilter) -> Result<usize> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| filter.matches(&r.metadata)).count())
    }

    async fn reset(&self) -> Result<()> {
        self.records.write().await.clear();
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        // No-op for in-memory store
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn metric(&self) -> DistanceMetric {
        self.metric
    }

    async fn insert(&self, records: Vec<VectorRecord>) -> Result<InsertReport> {
        let mut stored = self.records.write().await;
        let (admitted, rejected) = admit(records, self.dimensions, &stored);
        let accepted = admitted.iter().map(|r| r.id.clone()).collect();
        stored.extend(admitted);
        Ok(InsertReport { accepted, rejected })
    }

    async fn query(
        &self,
        vector: &[f32],
        k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<RetrievedEvidence>> {
        check_query_vector(vector, self.dimensions)?;
        let records = self.records.read().await;
        Ok(nearest(&records, vector, k, filter, self.metric))
    }

    async fn delete_by_filter(&self, filter: &MetadataFilter) -> Result<usize> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !filter.matches(&r.metadata));
        Ok(before - records.len())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use qag_application::ports::registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
};

/// Factory function for creating in-memory vector store provider instances.
fn in_memory_vector_store_factory(
    config: &VectorStoreProviderConfig,
) -> std::result::Result<Arc<dyn VectorStoreProvider>, String> {
    let dimensions = config
        .dimensions
        .ok_or_else(|| "in_memory vector store requires dimensions".to_string())?;
    Ok(Arc::new(InMemoryVectorStoreProvider::new(
        dimensions,
        config.metric,
    )))
}

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static IN_MEMORY_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "in_memory",
    description: "In-memory vector store (fast, non-persistent)",
    factory: in_memory_vector_store_factory,
};
