//! Plain-text extraction from raw uploads

pub mod basic;

pub use basic::BasicTextExtractor;
