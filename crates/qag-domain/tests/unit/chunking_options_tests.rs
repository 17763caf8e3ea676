//! Unit tests for chunking options

use qag_domain::ports::ChunkingOptions;
use qag_domain::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

#[test]
fn test_default_options() {
    let options = ChunkingOptions::default();
    assert_eq!(options.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(options.overlap, DEFAULT_CHUNK_OVERLAP);
    assert_eq!(options.step(), 650);
    assert!(options.validate().is_ok());
}

#[test]
fn test_overlap_must_be_smaller_than_size() {
    assert!(ChunkingOptions::new(100, 100).is_err());
    assert!(ChunkingOptions::new(100, 150).is_err());
    assert!(ChunkingOptions::new(0, 0).is_err());
    assert!(ChunkingOptions::new(100, 99).is_ok());
    assert!(ChunkingOptions::new(1, 0).is_ok());
}
