//! Session Markup Repositories
//!
//! | Repository | Persistence |
//! |------------|-------------|
//! | [`InMemoryMarkupRepository`] | none |
//! | [`FilesystemMarkupRepository`] | one directory per session, one file per source |

pub mod filesystem;
pub mod in_memory;

pub use filesystem::FilesystemMarkupRepository;
pub use in_memory::InMemoryMarkupRepository;
