//! # Domain Layer
//!
//! Core types for the retrieval and grounding pipeline: document chunks,
//! embeddings, session-scoped evidence, generated test cases and the
//! element inventory used to ground automation scripts.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`entities`] | Chunks, test cases and element descriptors |
//! | [`value_objects`] | Embeddings, metadata, filters, evidence, session ids |
//! | [`ports`] | Contracts for embedders, stores, generative models and extractors |
//! | [`constants`] | Domain constants |
//! | [`error`] | Domain error types |
//!
//! ## Example
//!
//! ```
//! use qag_domain::{ChunkMetadata, DocumentType, MetadataFilter, SessionId};
//!
//! let session = SessionId::new("S1").unwrap();
//! let meta = ChunkMetadata::new("spec.md", DocumentType::Text, 0, &session, 42);
//! assert!(MetadataFilter::for_session(&session).matches(&meta));
//! ```

/// Domain-level constants
pub mod constants;
/// Core business entities
pub mod entities;
/// Domain error types
pub mod error;
/// Port interfaces for external collaborators
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use constants::*;
pub use entities::*;
pub use error::{Error, Result};
pub use value_objects::*;
