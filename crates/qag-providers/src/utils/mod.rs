//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod http_response;

pub use http_response::{ApiKind, HttpResponseUtils, build_http_client, map_send_error};
