//! Token window chunking
//!
//! Windows start at `0, step, 2·step, …` with `step = chunk_size - overlap`.
//! The last window is the first whose end reaches the token count, so for
//! `n > chunk_size` tokens there are `⌈(n - overlap) / step⌉` chunks.

use qag_domain::error::Result;
use qag_domain::ports::providers::{ChunkingOptions, TextChunker};

/// Fixed-size whitespace token windows
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenWindowChunker;

impl TokenWindowChunker {
    /// Strategy name used in configuration
    pub const NAME: &'static str = "token_window";

    /// Create a new token window chunker
    pub fn new() -> Self {
        Self
    }
}

/// Split a token slice into overlapping windows
///
/// `options` must already be validated.
pub(crate) fn token_windows<'a>(tokens: &[&'a str], options: &ChunkingOptions) -> Vec<Vec<&'a str>> {
    let mut windows = Vec::new();
    if tokens.is_empty() {
        return windows;
    }

    let step = options.step();
    let mut start = 0;
    loop {
        let end = (start + options.chunk_size).min(tokens.len());
        windows.push(tokens[start..end].to_vec());
        if end == tokens.len() {
            break;
        }
        start += step;
    }
    windows
}

impl TextChunker for TokenWindowChunker {
    fn chunk(&self, text: &str, options: &ChunkingOptions) -> Result<Vec<String>> {
        options.validate()?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Ok(token_windows(&tokens, options)
            .into_iter()
            .map(|window| window.join(" "))
            .collect())
    }

    fn strategy_name(&self) -> &str {
        Self::NAME
    }
}
