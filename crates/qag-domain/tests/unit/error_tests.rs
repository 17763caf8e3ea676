//! Unit tests for domain errors

use qag_domain::Error;
use std::time::Duration;

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::ingestion("a.pdf", "unreadable").to_string(),
        "Ingestion error for 'a.pdf': unreadable"
    );
    assert_eq!(
        Error::DimensionMismatch {
            expected: 384,
            actual: 3
        }
        .to_string(),
        "Dimension mismatch: expected 384, got 3"
    );
    assert_eq!(
        Error::timeout("embedding", Duration::from_secs(30)).to_string(),
        "embedding timed out after 30s"
    );
}

#[test]
fn test_only_configuration_errors_are_fatal() {
    assert!(Error::config("missing api key").is_fatal());
    assert!(
        Error::configuration_with_source("bad manifest", std::io::Error::other("x")).is_fatal()
    );
    assert!(!Error::embedding("503").is_fatal());
    assert!(!Error::store_query("closed").is_fatal());
}

#[test]
fn test_from_io_and_json() {
    let io: Error = std::io::Error::other("disk").into();
    assert!(matches!(io, Error::IoSimple { .. }));

    let json: Error = serde_json::from_str::<serde_json::Value>("{")
        .expect_err("invalid json")
        .into();
    assert!(matches!(json, Error::Json { .. }));
}
