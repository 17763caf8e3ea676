//! Application Layer - QA Grounding Engine
//!
//! Use cases and the business rules that sit between the domain ports and
//! the concrete providers.
//!
//! ## Use Cases
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`KnowledgeBaseServiceImpl`] | chunk → embed (batched) → insert, per session |
//! | [`DocumentIngestionServiceImpl`] | raw uploads → text extraction → knowledge base, retaining page markup |
//! | [`TestCaseServiceImpl`] | retrieval-augmented test case generation with tolerant output parsing |
//! | [`ScriptServiceImpl`] | Selenium script generation grounded in the session's page markup |
//!
//! ## Ports
//!
//! - `ports::providers::*`: provider contracts (re-exported from `qag-domain`)
//! - `ports::services::*`: use case interfaces and their result types
//! - `ports::registry::*`: name → factory registries filled by `qag-providers`
//!
//! ## Dependencies
//!
//! This crate depends only on `qag-domain` and pure Rust libraries. It never
//! names a concrete provider.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
