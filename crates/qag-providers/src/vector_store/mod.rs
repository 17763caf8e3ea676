//! Vector Store Provider Implementations
//!
//! Provides storage backends for chunk embeddings.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryVectorStoreProvider | Local | In-memory storage (non-persistent) |
//! | FilesystemVectorStore | Local | Persistent append-only segment log |
//!
//! Both scan every record matching the filter and keep the `k` nearest,
//! so session filtering always happens before top-k selection.

pub mod filesystem;
pub mod in_memory;
mod scan;

// Re-export for convenience
pub use filesystem::{FilesystemVectorStore, FilesystemVectorStoreConfig};
pub use in_memory::InMemoryVectorStoreProvider;
