//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Chunk`] | Bounded slice of a document's text, the retrieval unit |
//! | [`TestCase`] | Structured test case produced from retrieved evidence |
//! | [`ElementDescriptor`] | Interactive page element used to ground scripts |

/// Document chunk entity
pub mod chunk;
/// Page element inventory entities
pub mod element;
/// Generated test case entity
pub mod test_case;

pub use chunk::{Chunk, SourceDocument};
pub use element::{ElementDescriptor, ElementInventory, ElementTag};
pub use test_case::TestCase;
