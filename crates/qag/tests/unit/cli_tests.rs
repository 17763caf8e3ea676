//! Tests for command parsing and execution

use clap::Parser;
use qag::cli::{Cli, Command, execute, providers_listing, read_test_case, read_upload};
use qag::domain::value_objects::{DocumentType, SessionId};
use qag::infrastructure::config::AppConfig;
use qag::infrastructure::init_app;
use std::path::PathBuf;

fn offline_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.embedding.provider = "null".to_string();
    config.embedding.dimensions = Some(16);
    config.vector_store.provider = "in_memory".to_string();
    config.generative.provider = "null".to_string();
    config.markup.provider = "in_memory".to_string();
    config
}

#[test]
fn test_parse_ingest() {
    let cli = Cli::try_parse_from(["qag", "-c", "qag.toml", "ingest", "-s", "demo", "a.txt", "b.html"])
        .expect("parse");

    assert_eq!(cli.config, Some(PathBuf::from("qag.toml")));
    assert_eq!(
        cli.command,
        Command::Ingest {
            session: "demo".to_string(),
            files: vec![PathBuf::from("a.txt"), PathBuf::from("b.html")],
        }
    );
}

#[test]
fn test_parse_generate_with_k() {
    let cli = Cli::try_parse_from(["qag", "generate", "--session", "demo", "-k", "3", "login lockout"])
        .expect("parse");

    assert_eq!(
        cli.command,
        Command::Generate {
            session: "demo".to_string(),
            k: Some(3),
            query: "login lockout".to_string(),
        }
    );
}

#[test]
fn test_ingest_requires_files() {
    assert!(Cli::try_parse_from(["qag", "ingest", "-s", "demo"]).is_err());
}

#[test]
fn test_providers_listing() {
    let listing = providers_listing();
    let names = |kind: &str| -> Vec<String> {
        listing[kind]
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|entry| entry["name"].as_str().map(str::to_string))
            .collect()
    };

    assert!(names("embedding").contains(&"null".to_string()));
    assert!(names("vector_store").contains(&"filesystem".to_string()));
    assert!(names("generative").contains(&"groq".to_string()));
    assert_eq!(listing["chunking"][0], "token_window");
}

#[test]
fn test_read_upload_uses_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("checkout.html");
    std::fs::write(&path, "<input id=\"code\">").expect("write");

    let upload = read_upload(&path).expect("read");

    assert_eq!(upload.source, "checkout.html");
    assert_eq!(upload.doc_type, DocumentType::Html);
}

#[test]
fn test_read_test_case_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("case.json");
    std::fs::write(
        &path,
        r#"{"Test_ID": "TC-9", "Feature": "Cart", "Test_Scenario": "Add item", "Expected_Result": "Badge shows 1", "Grounded_In": "cart.txt"}"#,
    )
    .expect("write");

    let case = read_test_case(&path).expect("read");
    assert_eq!(case.test_id, "TC-9");
    assert!(read_test_case(&dir.path().join("missing.json")).is_err());
}

#[tokio::test]
async fn test_execute_session_lifecycle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = dir.path().join("checkout.html");
    std::fs::write(&page, r#"<form><input id="code" name="code"><button id="apply">Apply</button></form>"#)
        .expect("write page");
    let notes = dir.path().join("pricing.txt");
    std::fs::write(&notes, "Codes are case sensitive.").expect("write notes");

    let context = init_app(offline_config()).expect("init");
    let session = "shop".to_string();

    execute(
        &context,
        Command::Ingest {
            session: session.clone(),
            files: vec![page, notes],
        },
    )
    .await
    .expect("ingest");
    execute(&context, Command::Inventory { session: session.clone() })
        .await
        .expect("inventory");
    execute(
        &context,
        Command::Generate {
            session: session.clone(),
            k: None,
            query: "discount code".to_string(),
        },
    )
    .await
    .expect("generate");
    execute(&context, Command::Reset { session: session.clone() })
        .await
        .expect("reset");

    let inventory = execute(&context, Command::Inventory { session }).await;
    assert!(inventory.is_err());
}

#[tokio::test]
async fn test_execute_rejects_blank_session() {
    let context = init_app(offline_config()).expect("init");
    let result = execute(&context, Command::Reset { session: "  ".to_string() }).await;
    assert!(result.is_err());
    assert!(SessionId::new("  ").is_err());
}
