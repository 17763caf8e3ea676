//! Text Chunker Domain Port

use crate::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Window budget for chunking operations
///
/// Both values are measured in whitespace-delimited tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingOptions {
    /// Maximum tokens per chunk
    pub chunk_size: usize,
    /// Tokens shared between consecutive chunks
    pub overlap: usize,
}

impl ChunkingOptions {
    /// Create validated options
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        let options = Self {
            chunk_size,
            overlap,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check `chunk_size > overlap`
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size <= self.overlap {
            return Err(Error::invalid_argument(format!(
                "chunk_size ({}) must be greater than overlap ({})",
                self.chunk_size, self.overlap
            )));
        }
        Ok(())
    }

    /// Tokens a window advances by; always at least one
    pub fn step(&self) -> usize {
        self.chunk_size.saturating_sub(self.overlap).max(1)
    }
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Domain Port for Text Chunking
///
/// Implementations must be deterministic: the same text and options always
/// yield the same sequence. Empty (or whitespace-only) text yields an empty
/// sequence, and every chunk respects `chunk_size`.
pub trait TextChunker: Send + Sync {
    /// Split text into ordered chunks
    fn chunk(&self, text: &str, options: &ChunkingOptions) -> Result<Vec<String>>;

    /// Strategy identifier (e.g. "token_window")
    fn strategy_name(&self) -> &str;
}
