//! Composition root
//!
//! Providers are resolved by name through the linkme registries and handed
//! to the use cases by constructor injection.

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, init_app};
