//! Tests for the in-memory vector store

use qag_domain::ports::providers::{VectorStoreAdmin, VectorStoreProvider};
use qag_domain::value_objects::{
    ChunkMetadata, DistanceMetric, DocumentType, MetadataFilter, SessionId, VectorRecord,
};
use qag_domain::Error;
use qag_providers::vector_store::InMemoryVectorStoreProvider;

fn session(id: &str) -> SessionId {
    SessionId::new(id).expect("valid session")
}

fn record(text: &str, vector: Vec<f32>, session: &SessionId, index: u32) -> VectorRecord {
    VectorRecord::new(
        text,
        vector,
        ChunkMetadata::new("doc.txt", DocumentType::Text, index, session, text.len()),
    )
}

fn store() -> InMemoryVectorStoreProvider {
    InMemoryVectorStoreProvider::new(2, DistanceMetric::Cosine)
}

#[tokio::test]
async fn test_query_never_crosses_sessions() {
    let store = store();
    let (a, b) = (session("A"), session("B"));
    store
        .insert(vec![
            record("a-near", vec![1.0, 0.0], &a, 0),
            record("b-nearest", vec![1.0, 0.01], &b, 0),
        ])
        .await
        .expect("insert");

    let hits = store
        .query(&[1.0, 0.0], 5, &MetadataFilter::for_session(&a))
        .await
        .expect("query");

    assert_eq!(hits.len(), 1);
    assert!(hits.iter().all(|h| h.metadata.session_id == a));
}

#[tokio::test]
async fn test_filter_applies_before_top_k() {
    let store = store();
    let (big, small) = (session("big"), session("small"));

    let mut records: Vec<VectorRecord> = (0..50)
        .map(|i| record(&format!("big-{i}"), vec![1.0, 0.0], &big, i))
        .collect();
    records.push(record("small-far", vec![0.0, 1.0], &small, 0));
    records.push(record("small-farther", vec![-1.0, 0.1], &small, 1));
    store.insert(records).await.expect("insert");

    let hits = store
        .query(&[1.0, 0.0], 5, &MetadataFilter::for_session(&small))
        .await
        .expect("query");

    let texts: Vec<_> = hits.iter().map(|h| h.document.as_str()).collect();
    assert_eq!(texts, vec!["small-far", "small-farther"]);
}

#[tokio::test]
async fn test_results_are_nearest_first_with_distances() {
    let store = store();
    let s = session("s");
    store
        .insert(vec![
            record("far", vec![0.0, 1.0], &s, 0),
            record("near", vec![1.0, 0.1], &s, 1),
        ])
        .await
        .expect("insert");

    let hits = store
        .query(&[1.0, 0.0], 2, &MetadataFilter::for_session(&s))
        .await
        .expect("query");

    assert_eq!(hits[0].document, "near");
    let d0 = hits[0].distance.expect("distance reported");
    let d1 = hits[1].distance.expect("distance reported");
    assert!(d0 <= d1);
}

#[tokio::test]
async fn test_empty_session_returns_empty_results() {
    let hits = store()
        .query(&[1.0, 0.0], 3, &MetadataFilter::for_session(&session("nobody")))
        .await
        .expect("query");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_mismatched_records_are_reported_not_stored() {
    let store = store();
    let s = session("s");

    let report = store
        .insert(vec![
            record("ok", vec![1.0, 0.0], &s, 0),
            record("bad", vec![1.0, 0.0, 0.0], &s, 1),
        ])
        .await
        .expect("insert");

    assert_eq!(report.accepted_count(), 1);
    assert_eq!(report.rejected[0].index, 1);
    assert_eq!(store.count(&MetadataFilter::any()).await.expect("count"), 1);
}

#[tokio::test]
async fn test_query_vector_dimension_is_checked() {
    let err = store()
        .query(&[1.0, 0.0, 0.0], 1, &MetadataFilter::any())
        .await
        .expect_err("wrong dimension");
    assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 3 }));
}

#[tokio::test]
async fn test_delete_by_filter_and_reset() {
    let store = store();
    let (a, b) = (session("A"), session("B"));
    store
        .insert(vec![
            record("a1", vec![1.0, 0.0], &a, 0),
            record("a2", vec![0.0, 1.0], &a, 1),
            record("b1", vec![1.0, 1.0], &b, 0),
        ])
        .await
        .expect("insert");

    let removed = store
        .delete_by_filter(&MetadataFilter::for_session(&a))
        .await
        .expect("delete");
    assert_eq!(removed, 2);
    assert_eq!(store.count(&MetadataFilter::any()).await.expect("count"), 1);

    store.reset().await.expect("reset");
    assert_eq!(store.count(&MetadataFilter::any()).await.expect("count"), 0);
}

#[tokio::test]
async fn test_supplied_ids_are_kept_and_generated_ids_are_unique() {
    let store = store();
    let s = session("s");
    let report = store
        .insert(vec![
            record("x", vec![1.0, 0.0], &s, 0).with_id("fixed-id"),
            record("y", vec![1.0, 0.0], &s, 1),
            record("z", vec![1.0, 0.0], &s, 2),
        ])
        .await
        .expect("insert");

    assert_eq!(report.accepted[0], "fixed-id");
    assert_ne!(report.accepted[1], report.accepted[2]);
}
