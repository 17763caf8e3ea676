//! Boundary-aware chunking
//!
//! Text is cut into segments at paragraph breaks (blank lines) and sentence
//! ends (`.`, `!`, `?`). A sentence longer than the budget falls back to
//! consecutive token pieces. Segments are packed greedily up to
//! `chunk_size` tokens; when a chunk is closed, its trailing whole segments
//! totalling at most `overlap` tokens are carried into the next one.

use super::token_window::token_windows;
use qag_domain::error::Result;
use qag_domain::ports::providers::{ChunkingOptions, TextChunker};
use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("Invalid regex"));

/// Characters that may trail a sentence terminator (closing quotes, brackets)
const SENTENCE_TRAILERS: &[char] = &['"', '\'', ')', ']', '»', '”', '’'];

/// A run of tokens that is never split across chunks
#[derive(Debug, Clone)]
struct Segment<'a> {
    tokens: Vec<&'a str>,
    starts_paragraph: bool,
}

/// Packs paragraphs and sentences into token-bounded chunks
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryAwareChunker;

impl BoundaryAwareChunker {
    /// Strategy name used in configuration
    pub const NAME: &'static str = "boundary_aware";

    /// Create a new boundary-aware chunker
    pub fn new() -> Self {
        Self
    }
}

fn ends_sentence(token: &str) -> bool {
    token
        .trim_end_matches(SENTENCE_TRAILERS)
        .ends_with(['.', '!', '?'])
}

/// Cut text into paragraph-tagged sentence segments no longer than the budget
fn segments<'a>(text: &'a str, options: &ChunkingOptions) -> Vec<Segment<'a>> {
    let piece_options = ChunkingOptions {
        chunk_size: options.chunk_size,
        overlap: 0,
    };
    let mut segments = Vec::new();

    for paragraph in PARAGRAPH_BREAK.split(text) {
        let mut starts_paragraph = true;
        let mut sentence: Vec<&str> = Vec::new();
        let tokens: Vec<&str> = paragraph.split_whitespace().collect();

        for (i, token) in tokens.iter().enumerate() {
            sentence.push(token);
            if ends_sentence(token) || i + 1 == tokens.len() {
                for piece in token_windows(&sentence, &piece_options) {
                    segments.push(Segment {
                        tokens: piece,
                        starts_paragraph,
                    });
                    starts_paragraph = false;
                }
                sentence.clear();
            }
        }
    }
    segments
}

/// Join segments, separating paragraphs by a blank line
fn render(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push_str(if segment.starts_paragraph { "\n\n" } else { " " });
        }
        out.push_str(&segment.tokens.join(" "));
    }
    out
}

fn token_count(segments: &[Segment<'_>]) -> usize {
    segments.iter().map(|s| s.tokens.len()).sum()
}

impl TextChunker for BoundaryAwareChunker {
    fn chunk(&self, text: &str, options: &ChunkingOptions) -> Result<Vec<String>> {
        options.validate()?;

        let mut chunks = Vec::new();
        let mut current: Vec<Segment<'_>> = Vec::new();
        // Segments in `current` that were not carried over from the previous chunk
        let mut fresh = 0_usize;

        for segment in segments(text, options) {
            let len = segment.tokens.len();
            if fresh > 0 && token_count(&current) + len > options.chunk_size {
                chunks.push(render(&current));

                let mut carried = 0;
                let mut keep_from = current.len();
                while keep_from > 0 {
                    let candidate = current[keep_from - 1].tokens.len();
                    if carried + candidate > options.overlap
                        || carried + candidate + len > options.chunk_size
                    {
                        break;
                    }
                    carried += candidate;
                    keep_from -= 1;
                }
                current.drain(..keep_from);
                fresh = 0;
            }
            current.push(segment);
            fresh += 1;
        }

        if fresh > 0 {
            chunks.push(render(&current));
        }
        Ok(chunks)
    }

    fn strategy_name(&self) -> &str {
        Self::NAME
    }
}
