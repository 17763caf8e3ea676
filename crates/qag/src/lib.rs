//! # QA Grounding Engine
//!
//! Turns product documentation into grounded QA artifacts: documents are
//! chunked, embedded and stored per session; test cases are generated from
//! the nearest evidence only; Selenium scripts are constrained to selectors
//! that exist in the ingested page markup.
//!
//! ## Example
//!
//! ```ignore
//! use qag::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let outcome = context
//!     .test_cases()
//!     .generate_test_cases("discount codes", &session, 5)
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, errors and provider ports
//! - `application` - Use cases, output parsing and provider registries
//! - `providers` - Chunkers, embedders, vector stores, generative models
//! - `infrastructure` - Configuration, logging and the composition root
//! - `cli` - The `qag` command line

/// Domain layer - core business logic and types
pub mod domain {
    pub use qag_domain::*;
}

/// Application layer - use cases and registries
pub mod application {
    pub use qag_application::*;
}

/// Provider implementations
pub mod providers {
    pub use qag_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use qag_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;
