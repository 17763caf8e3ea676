//! Tests for raw document ingestion

use crate::test_utils::{CountingEmbedder, knowledge_base, session, settings, store};
use qag_application::ports::providers::MarkupRepository;
use qag_application::ports::services::{
    BuildStatus, DocumentIngestionServiceInterface, KnowledgeBaseServiceInterface, RawDocument,
};
use qag_application::use_cases::DocumentIngestionServiceImpl;
use qag_domain::value_objects::DocumentType;
use qag_providers::extraction::BasicTextExtractor;
use qag_providers::markup::{FilesystemMarkupRepository, InMemoryMarkupRepository};
use std::sync::Arc;

const PAGE: &str = r#"<html><head><title>Login</title><script>var x = 1;</script></head>
<body><h1>Sign in</h1><p>Enter your email address and password.</p>
<input id="email" type="email"><button id="go">Sign in</button></body></html>"#;

#[test]
fn test_raw_document_type_follows_extension() {
    assert_eq!(
        RawDocument::from_named_bytes("Login.HTM", Vec::new()).doc_type,
        DocumentType::Html
    );
    assert_eq!(
        RawDocument::from_named_bytes("notes", Vec::new()).doc_type,
        DocumentType::Text
    );
}

#[tokio::test]
async fn test_ingest_mixed_uploads() {
    let s = session("upload");
    let markup = Arc::new(InMemoryMarkupRepository::new());
    let kb = Arc::new(knowledge_base(
        Arc::new(CountingEmbedder::new()),
        store(),
        settings(100, 10, 8),
    ));
    let service =
        DocumentIngestionServiceImpl::new(Arc::new(BasicTextExtractor::new()), markup.clone(), kb.clone());

    let report = service
        .ingest(
            vec![
                RawDocument::from_named_bytes("login.html", PAGE.as_bytes().to_vec()),
                RawDocument::from_named_bytes("rules.txt", b"Passwords expire after ninety days.".to_vec()),
                RawDocument::from_named_bytes("api.json", br#"{"endpoint": "/login"}"#.to_vec()),
                RawDocument::from_named_bytes("scan.pdf", b"%PDF-1.7".to_vec()),
            ],
            &s,
        )
        .await
        .expect("ingest");

    assert_eq!(report.status, BuildStatus::Ok);
    assert_eq!(report.chunks_added, 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].source, "scan.pdf");

    let pages = markup.load(&s).await.expect("load markup");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].source, "login.html");
    assert_eq!(pages[0].markup, PAGE);
    assert_eq!(kb.session_size(&s).await.expect("size"), 3);
}

#[tokio::test]
async fn test_only_unreadable_uploads_is_no_chunks() {
    let markup = Arc::new(InMemoryMarkupRepository::new());
    let kb = Arc::new(knowledge_base(
        Arc::new(CountingEmbedder::new()),
        store(),
        settings(100, 10, 8),
    ));
    let service = DocumentIngestionServiceImpl::new(Arc::new(BasicTextExtractor::new()), markup, kb);

    let report = service
        .ingest(
            vec![
                RawDocument::from_named_bytes("scan.pdf", b"%PDF-1.7".to_vec()),
                RawDocument::from_named_bytes("broken.txt", vec![0xff, 0xfe, 0x00]),
            ],
            &session("s"),
        )
        .await
        .expect("ingest");

    assert_eq!(report.status, BuildStatus::NoChunks);
    assert_eq!(report.skipped.len(), 2);
}

#[tokio::test]
async fn test_reset_drops_records_and_markup() {
    let s = session("reset");
    let markup = Arc::new(InMemoryMarkupRepository::new());
    let kb = Arc::new(knowledge_base(
        Arc::new(CountingEmbedder::new()),
        store(),
        settings(100, 10, 8),
    ));
    let service =
        DocumentIngestionServiceImpl::new(Arc::new(BasicTextExtractor::new()), markup.clone(), kb.clone());
    service
        .ingest(
            vec![RawDocument::from_named_bytes("login.html", PAGE.as_bytes().to_vec())],
            &s,
        )
        .await
        .expect("ingest");

    let removed = service.reset_session(&s).await.expect("reset");

    assert_eq!(removed, 1);
    assert_eq!(kb.session_size(&s).await.expect("size"), 0);
    assert!(markup.load(&s).await.expect("load").is_empty());
}

#[tokio::test]
async fn test_unstorable_markup_skips_only_that_page() {
    let s = session("odd-names");
    let dir = tempfile::TempDir::new().expect("temp dir");
    let markup = Arc::new(FilesystemMarkupRepository::new(dir.path()));
    let kb = Arc::new(knowledge_base(
        Arc::new(CountingEmbedder::new()),
        store(),
        settings(100, 10, 8),
    ));
    let service =
        DocumentIngestionServiceImpl::new(Arc::new(BasicTextExtractor::new()), markup.clone(), kb.clone());

    let report = service
        .ingest(
            vec![
                RawDocument::from_named_bytes("rules.txt", b"Passwords expire after ninety days.".to_vec()),
                RawDocument::from_named_bytes("odd -->name.html", PAGE.as_bytes().to_vec()),
            ],
            &s,
        )
        .await
        .expect("ingest");

    assert_eq!(report.status, BuildStatus::Ok);
    assert_eq!(report.chunks_added, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].source, "odd -->name.html");
    assert!(report.skipped[0].reason.contains("not storable"));
    assert_eq!(kb.session_size(&s).await.expect("size"), 1);
    assert!(markup.load(&s).await.expect("load markup").is_empty());
}
