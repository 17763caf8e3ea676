//! Tests for the knowledge base builder

use crate::test_utils::{
    CountingEmbedder, DIMS, PoisonedEmbedder, StalledEmbedder, knowledge_base, session, settings,
    store, words,
};
use qag_application::ports::providers::{VectorStoreAdmin, VectorStoreProvider};
use qag_application::ports::services::{BuildStatus, KnowledgeBaseServiceInterface};
use qag_application::use_cases::{KnowledgeBaseServiceImpl, KnowledgeBaseSettings};
use qag_domain::entities::SourceDocument;
use qag_domain::error::Error;
use qag_domain::value_objects::{DistanceMetric, DocumentType, MetadataFilter};
use qag_providers::chunking::TokenWindowChunker;
use qag_providers::embedding::NullEmbeddingProvider;
use qag_providers::vector_store::InMemoryVectorStoreProvider;
use std::sync::Arc;
use std::time::Duration;

fn doc(source: &str, text: &str) -> SourceDocument {
    SourceDocument::new(source, text, DocumentType::Text)
}

#[tokio::test]
async fn test_long_document_is_windowed_and_indexed() {
    let store = store();
    let embedder = Arc::new(CountingEmbedder::new());
    let kb = knowledge_base(embedder.clone(), store.clone(), settings(800, 150, 64));
    let s = session("e2e");

    let report = kb
        .build(&[doc("guide.txt", &words(1600))], &s)
        .await
        .expect("build");

    assert_eq!(report.status, BuildStatus::Ok);
    assert_eq!(report.chunks_added, 3);
    assert!(report.skipped.is_empty());
    assert_eq!(embedder.batches(), 1);

    let hits = store
        .query(&vec![0.0; DIMS], 10, &MetadataFilter::for_session(&s))
        .await
        .expect("query");
    let mut indices: Vec<u32> = hits.iter().map(|h| h.metadata.chunk_index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(hits.iter().all(|h| h.metadata.source == "guide.txt"));
    let first = hits
        .iter()
        .find(|h| h.metadata.chunk_index == 1)
        .expect("second chunk");
    assert!(first.document.starts_with("w650 "));
}

#[tokio::test]
async fn test_embedding_is_batched() {
    let embedder = Arc::new(CountingEmbedder::new());
    let kb = knowledge_base(embedder.clone(), store(), settings(800, 150, 2));

    kb.build(&[doc("guide.txt", &words(1600))], &session("s"))
        .await
        .expect("build");

    assert_eq!(embedder.batches(), 2);
}

#[tokio::test]
async fn test_ingesting_twice_duplicates_records() {
    let store = store();
    let kb = knowledge_base(Arc::new(CountingEmbedder::new()), store.clone(), settings(10, 2, 8));
    let s = session("twice");
    let docs = [doc("a.txt", &words(25))];

    let first = kb.build(&docs, &s).await.expect("first build");
    let second = kb.build(&docs, &s).await.expect("second build");

    assert_eq!(first.chunks_added, second.chunks_added);
    assert_eq!(
        kb.session_size(&s).await.expect("size"),
        first.chunks_added * 2
    );
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let store = store();
    let kb = knowledge_base(Arc::new(CountingEmbedder::new()), store.clone(), settings(10, 2, 8));
    let (a, b) = (session("A"), session("B"));

    kb.build(&[doc("a.txt", &words(30))], &a).await.expect("build a");
    kb.build(&[doc("b.txt", &words(12))], &b).await.expect("build b");
    let b_size = kb.session_size(&b).await.expect("size b");

    let removed = kb.delete_session(&a).await.expect("delete a");

    assert!(removed > 0);
    assert_eq!(kb.session_size(&a).await.expect("size a"), 0);
    assert_eq!(kb.session_size(&b).await.expect("size b"), b_size);
    assert_eq!(
        store.count(&MetadataFilter::any()).await.expect("count"),
        b_size
    );
}

#[tokio::test]
async fn test_blank_documents_produce_no_chunks_without_embedding() {
    let embedder = Arc::new(CountingEmbedder::new());
    let kb = knowledge_base(embedder.clone(), store(), settings(10, 2, 8));

    let report = kb
        .build(&[doc("empty.txt", ""), doc("blank.txt", " \n\t ")], &session("s"))
        .await
        .expect("build");

    assert_eq!(report.status, BuildStatus::NoChunks);
    assert_eq!(report.chunks_added, 0);
    assert!(report.skipped.is_empty());
    assert_eq!(embedder.batches(), 0);
}

#[tokio::test]
async fn test_no_documents_is_no_chunks() {
    let kb = knowledge_base(Arc::new(CountingEmbedder::new()), store(), settings(10, 2, 8));
    let report = kb.build(&[], &session("s")).await.expect("build");
    assert_eq!(report.status, BuildStatus::NoChunks);
}

#[tokio::test]
async fn test_failing_document_does_not_block_others() {
    let store = store();
    let kb = knowledge_base(Arc::new(PoisonedEmbedder::new("POISON")), store.clone(), settings(10, 2, 8));
    let s = session("partial");

    let report = kb
        .build(
            &[
                doc("good-1.txt", &words(8)),
                doc("bad.txt", "this document carries POISON inside"),
                doc("good-2.txt", &words(8)),
            ],
            &s,
        )
        .await
        .expect("build");

    assert_eq!(report.status, BuildStatus::Ok);
    assert_eq!(report.chunks_added, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].source, "bad.txt");
    assert!(report.skipped[0].reason.contains("service unavailable"));
    assert!(
        store
            .query(&vec![0.0; DIMS], 10, &MetadataFilter::for_session(&s).with_source("bad.txt"))
            .await
            .expect("query")
            .is_empty()
    );
}

#[tokio::test]
async fn test_all_documents_failing_is_failed() {
    let kb = knowledge_base(Arc::new(PoisonedEmbedder::new("POISON")), store(), settings(10, 2, 8));

    let report = kb
        .build(&[doc("bad.txt", "POISON")], &session("s"))
        .await
        .expect("build");

    assert_eq!(report.status, BuildStatus::Failed);
    assert_eq!(report.chunks_added, 0);
    assert_eq!(report.skipped.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stalled_embedder_times_out_per_document() {
    let kb = knowledge_base(
        Arc::new(StalledEmbedder),
        store(),
        KnowledgeBaseSettings {
            embed_timeout: Duration::from_secs(5),
            ..settings(10, 2, 8)
        },
    );

    let report = kb
        .build(&[doc("slow.txt", &words(5))], &session("s"))
        .await
        .expect("build");

    assert_eq!(report.status, BuildStatus::Failed);
    assert!(report.skipped[0].reason.contains("timed out"));
}

#[test]
fn test_dimension_mismatch_is_fatal_configuration() {
    let result = KnowledgeBaseServiceImpl::new(
        Arc::new(TokenWindowChunker::new()),
        Arc::new(NullEmbeddingProvider::with_dimensions(384)),
        Arc::new(InMemoryVectorStoreProvider::new(768, DistanceMetric::Cosine)),
        KnowledgeBaseSettings::default(),
    );

    let err = result.err().expect("mismatch rejected");
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let result = KnowledgeBaseServiceImpl::new(
        Arc::new(TokenWindowChunker::new()),
        Arc::new(CountingEmbedder::new()),
        store(),
        KnowledgeBaseSettings {
            batch_size: 0,
            ..KnowledgeBaseSettings::default()
        },
    );

    assert!(matches!(result.err(), Some(Error::InvalidArgument { .. })));
}
