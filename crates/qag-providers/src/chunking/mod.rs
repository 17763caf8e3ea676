//! Text Chunking Strategies
//!
//! | Strategy | Description |
//! |----------|-------------|
//! | [`TokenWindowChunker`] | Fixed windows of whitespace tokens advancing by `chunk_size - overlap` |
//! | [`BoundaryAwareChunker`] | Packs whole paragraphs and sentences into the same token budget |
//!
//! Both strategies are deterministic and measure size in whitespace tokens.

pub mod boundary_aware;
pub mod token_window;

pub use boundary_aware::BoundaryAwareChunker;
pub use token_window::TokenWindowChunker;

use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::TextChunker;
use std::sync::Arc;

/// Names of the available chunking strategies
pub const CHUNKING_STRATEGIES: &[&str] = &[TokenWindowChunker::NAME, BoundaryAwareChunker::NAME];

/// Resolve a chunking strategy by name
pub fn resolve_chunker(strategy: &str) -> Result<Arc<dyn TextChunker>> {
    match strategy {
        TokenWindowChunker::NAME => Ok(Arc::new(TokenWindowChunker::new())),
        BoundaryAwareChunker::NAME => Ok(Arc::new(BoundaryAwareChunker::new())),
        other => Err(Error::config(format!(
            "Unknown chunking strategy '{other}'. Available strategies: {CHUNKING_STRATEGIES:?}"
        ))),
    }
}
