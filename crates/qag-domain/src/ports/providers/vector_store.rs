use crate::error::Result;
use crate::value_objects::{
    DistanceMetric, InsertReport, MetadataFilter, RetrievedEvidence, VectorRecord,
};
use async_trait::async_trait;

/// Vector Store Administrative Operations
///
/// Kept apart from the read/write contract so admin tooling can depend on
/// a narrow interface.
#[async_trait]
pub trait VectorStoreAdmin: Send + Sync {
    /// Number of records matching a filter
    async fn count(&self, filter: &MetadataFilter) -> Result<usize>;

    /// Remove every record
    async fn reset(&self) -> Result<()>;

    /// Flush pending writes to durable storage
    async fn flush(&self) -> Result<()>;

    /// Provider identifier (e.g., "filesystem", "in_memory")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation)
    async fn health_check(&self) -> Result<()> {
        self.count(&MetadataFilter::any()).await?;
        Ok(())
    }
}

/// Vector Storage Interface
///
/// One logical knowledge base shared by every session. Sessions are
/// separated by metadata filter at query time, not by physical collection.
///
/// # Guarantees
///
/// - Every stored vector has exactly [`dimensions`](Self::dimensions) elements;
///   records of another length are rejected and reported.
/// - `query` applies the filter before selecting the `k` nearest records, so
///   a small session is never under-filled by other sessions' records.
/// - A `query` issued after `insert` returns observes the inserted records.
/// - Each record is written atomically; a concurrent query never sees a
///   partially written record.
///
/// # Example
///
/// ```ignore
/// let report = store.insert(records).await?;
/// let evidence = store
///     .query(&query_vector, 5, &MetadataFilter::for_session(&session))
///     .await?;
/// for item in evidence {
///     println!("{} ({:?})", item.metadata.source, item.distance);
/// }
/// ```
#[async_trait]
pub trait VectorStoreProvider: VectorStoreAdmin + Send + Sync {
    /// Declared vector dimension
    fn dimensions(&self) -> usize;

    /// Declared distance metric
    fn metric(&self) -> DistanceMetric;

    /// Insert records, assigning ids where none were supplied
    ///
    /// # Returns
    /// The accepted ids and the rejected records of this call
    async fn insert(&self, records: Vec<VectorRecord>) -> Result<InsertReport>;

    /// Return up to `k` records matching `filter`, nearest first
    async fn query(
        &self,
        vector: &[f32],
        k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<RetrievedEvidence>>;

    /// Remove every record matching `filter`
    ///
    /// # Returns
    /// Number of removed records
    async fn delete_by_filter(&self, filter: &MetadataFilter) -> Result<usize>;
}
