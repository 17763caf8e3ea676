//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Fixed-dimension vector representation of text |
//! | [`SessionId`] | Tenant identifier carried by every ingestion and retrieval |
//! | [`DocumentType`] | Declared type of an ingested document |
//! | [`ChunkMetadata`] | Fixed-schema metadata stored with each vector |
//! | [`MetadataFilter`] | Exact-match predicate over [`ChunkMetadata`] |
//! | [`VectorRecord`] | A (text, vector, metadata) triple to insert |
//! | [`RetrievedEvidence`] | Nearest-neighbour query result |
//! | [`InsertReport`] | Accepted/rejected counts for one insert call |
//! | [`DistanceMetric`] | Distance function fixed per store |

/// Semantic embedding value objects
pub mod embedding;
/// Store metadata and filters
pub mod metadata;
/// Retrieval value objects
pub mod search;
/// Tenant identifier
pub mod session;

pub use embedding::Embedding;
pub use metadata::{ChunkMetadata, DocumentType, MetadataFilter};
pub use search::{DistanceMetric, InsertReport, RejectedRecord, RetrievedEvidence, VectorRecord};
pub use session::SessionId;
