//! Unit tests for store metadata and filters

use qag_domain::{ChunkMetadata, DocumentType, MetadataFilter, SessionId};

fn session(id: &str) -> SessionId {
    SessionId::new(id).expect("valid session")
}

#[test]
fn test_document_type_from_path() {
    assert_eq!(DocumentType::from_path("spec.PDF"), DocumentType::Pdf);
    assert_eq!(DocumentType::from_path("checkout.htm"), DocumentType::Html);
    assert_eq!(DocumentType::from_path("data.json"), DocumentType::Json);
    assert_eq!(DocumentType::from_path("notes.md"), DocumentType::Text);
    assert_eq!(DocumentType::from_path("README"), DocumentType::Text);
}

#[test]
fn test_document_type_from_str() {
    assert_eq!("txt".parse::<DocumentType>().ok(), Some(DocumentType::Text));
    assert_eq!(" HTML ".parse::<DocumentType>().ok(), Some(DocumentType::Html));
    assert!("docx".parse::<DocumentType>().is_err());
}

#[test]
fn test_filter_matching() {
    let s1 = session("S1");
    let meta = ChunkMetadata::new("spec.md", DocumentType::Text, 0, &s1, 10);

    assert!(MetadataFilter::any().matches(&meta));
    assert!(MetadataFilter::any().is_unrestricted());
    assert!(MetadataFilter::for_session(&s1).matches(&meta));
    assert!(!MetadataFilter::for_session(&session("S2")).matches(&meta));
    assert!(MetadataFilter::for_session(&s1)
        .with_source("spec.md")
        .with_doc_type(DocumentType::Text)
        .matches(&meta));
    assert!(!MetadataFilter::for_session(&s1)
        .with_doc_type(DocumentType::Html)
        .matches(&meta));
    assert!(!MetadataFilter::any().with_source("other.md").matches(&meta));
}

#[test]
fn test_metadata_wire_shape() {
    let meta = ChunkMetadata::new("spec.md", DocumentType::Json, 2, &session("S1"), 99);
    let json = serde_json::to_value(&meta).expect("serialization should succeed");

    assert_eq!(json["source"], "spec.md");
    assert_eq!(json["type"], "json");
    assert_eq!(json["chunk_index"], 2);
    assert_eq!(json["session_id"], "S1");
    assert_eq!(json["chunk_size_est"], 99);
}

#[test]
fn test_metadata_rejects_empty_session_on_deserialize() {
    let raw = r#"{"source":"a","type":"text","chunk_index":0,"session_id":""}"#;
    assert!(serde_json::from_str::<ChunkMetadata>(raw).is_err());
}
