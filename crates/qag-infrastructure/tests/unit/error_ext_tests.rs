//! Tests for the error context extension

use qag_domain::error::Error;
use qag_infrastructure::error_ext::ErrorContext;
use std::io;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_io_context() {
    let err = failing_io().io_context("reading segment").expect_err("error");
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("reading segment: no such file"));
}

#[test]
fn test_config_context_is_fatal() {
    let err = failing_io().config_context("loading manifest").expect_err("error");
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_lazy_context() {
    let err = failing_io()
        .with_context(|| format!("attempt {}", 3))
        .expect_err("error");
    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("attempt 3"));
}
