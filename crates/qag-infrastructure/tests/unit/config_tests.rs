//! Tests for configuration loading

use qag_domain::value_objects::DistanceMetric;
use qag_infrastructure::config::{AppConfig, ConfigLoader};
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

const OFFLINE: &str = r#"
[embedding]
provider = "null"

[generative]
provider = "null"
"#;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.chunking.chunk_size, 800);
    assert_eq!(config.chunking.overlap, 150);
    assert_eq!(config.chunking.strategy, "boundary_aware");
    assert_eq!(config.embedding.batch_size, 64);
    assert_eq!(config.embedding.timeout_secs, 30);
    assert_eq!(config.generative.timeout_secs, 60);
    assert!((config.generative.temperature - 0.1).abs() < f32::EPSILON);
    assert_eq!(config.retrieval.top_k, 5);
    assert!(config.retrieval.validate_grounding);
    assert_eq!(config.vector_store.provider, "filesystem");
    assert_eq!(config.vector_store.metric, DistanceMetric::Cosine);
    assert_eq!(config.markup.provider, "filesystem");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let file = write_config(
        r#"
[embedding]
provider = "null"
dimensions = 128

[generative]
provider = "null"
response = "[]"

[chunking]
strategy = "token_window"
chunk_size = 400
overlap = 40

[vector_store]
provider = "in_memory"
metric = "euclidean"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("load");

    assert_eq!(config.embedding.dimensions, Some(128));
    assert_eq!(config.embedding.batch_size, 64);
    assert_eq!(config.chunking.strategy, "token_window");
    assert_eq!(config.chunking.chunk_size, 400);
    assert_eq!(config.vector_store.metric, DistanceMetric::Euclidean);
    assert_eq!(config.generative.response.as_deref(), Some("[]"));
    assert_eq!(config.retrieval.top_k, 5);
}

#[test]
fn test_missing_explicit_file_is_fatal() {
    let err = ConfigLoader::new()
        .with_config_path("/definitely/not/here/qag.toml")
        .load()
        .expect_err("missing file");
    assert!(err.is_fatal());
}

#[test]
fn test_invalid_chunking_is_fatal() {
    let file = write_config(&format!("{OFFLINE}\n[chunking]\nchunk_size = 100\noverlap = 100\n"));
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("overlap >= chunk_size");
    assert!(err.is_fatal());
}

#[test]
fn test_unknown_log_level_is_fatal() {
    let file = write_config(&format!("{OFFLINE}\n[logging]\nlevel = \"loud\"\n"));
    assert!(ConfigLoader::new().with_config_path(file.path()).load().is_err());
}

#[test]
fn test_malformed_toml_is_fatal() {
    let file = write_config("[chunking\nchunk_size = ");
    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("malformed");
    assert!(err.is_fatal());
}

#[test]
fn test_save_and_reload() {
    let file = write_config(OFFLINE);
    let loader = ConfigLoader::new().with_config_path(file.path());
    let mut config = loader.load().expect("load");
    config.retrieval.top_k = 9;

    let dir = tempfile::tempdir().expect("tempdir");
    let saved = dir.path().join("qag.toml");
    loader.save_to_file(&config, &saved).expect("save");

    let reloaded = ConfigLoader::new().with_config_path(&saved).load().expect("reload");
    assert_eq!(reloaded.retrieval.top_k, 9);
    assert_eq!(reloaded.embedding.provider, "null");
}

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

/// Run with: `cargo test -p qag-infrastructure --test unit config -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_toml() {
    let file = write_config(OFFLINE);
    set_env("QAG_CHUNKING__CHUNK_SIZE", "300");
    set_env("QAG_RETRIEVAL__TOP_K", "2");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("load");

    assert_eq!(config.chunking.chunk_size, 300);
    assert_eq!(config.retrieval.top_k, 2);

    remove_env("QAG_CHUNKING__CHUNK_SIZE");
    remove_env("QAG_RETRIEVAL__TOP_K");
}

/// Run with: `cargo test -p qag-infrastructure --test unit config -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_groq_key_from_environment() {
    let file = write_config("[embedding]\nprovider = \"null\"\n\n[generative]\nprovider = \"groq\"\n");
    set_env("GROQ_API_KEY", "gsk-from-env");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("load");

    assert_eq!(config.generative.api_key.as_deref(), Some("gsk-from-env"));

    remove_env("GROQ_API_KEY");
}
