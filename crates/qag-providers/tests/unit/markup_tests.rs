//! Tests for the session markup repositories

use qag_domain::ports::providers::MarkupRepository;
use qag_domain::value_objects::SessionId;
use qag_providers::markup::{FilesystemMarkupRepository, InMemoryMarkupRepository};
use tempfile::TempDir;

fn session(id: &str) -> SessionId {
    SessionId::new(id).expect("valid session")
}

async fn exercise(repository: &dyn MarkupRepository) {
    let (a, b) = (session("A"), session("B"));
    repository
        .save(&a, "z-page.html", "<p>z</p>")
        .await
        .expect("save");
    repository
        .save(&a, "a-page.html", "<p>old</p>")
        .await
        .expect("save");
    repository
        .save(&a, "a-page.html", "<p>new</p>")
        .await
        .expect("save");
    repository
        .save(&b, "other.html", "<p>b</p>")
        .await
        .expect("save");

    let pages = repository.load(&a).await.expect("load");
    let sources: Vec<&str> = pages.iter().map(|p| p.source.as_str()).collect();
    assert_eq!(sources, vec!["a-page.html", "z-page.html"]);
    assert_eq!(pages[0].markup, "<p>new</p>");

    assert_eq!(repository.delete_session(&a).await.expect("delete"), 2);
    assert!(repository.load(&a).await.expect("load").is_empty());
    assert_eq!(repository.load(&b).await.expect("load").len(), 1);
    assert_eq!(repository.delete_session(&a).await.expect("delete"), 0);
}

#[tokio::test]
async fn test_in_memory_repository() {
    exercise(&InMemoryMarkupRepository::new()).await;
}

#[tokio::test]
async fn test_filesystem_repository() {
    let dir = TempDir::new().expect("temp dir");
    exercise(&FilesystemMarkupRepository::new(dir.path())).await;
}

#[tokio::test]
async fn test_filesystem_repository_persists_original_names() {
    let dir = TempDir::new().expect("temp dir");
    let s = session("user/../42");
    FilesystemMarkupRepository::new(dir.path())
        .save(&s, "pages/check out.html", "<form></form>")
        .await
        .expect("save");

    let pages = FilesystemMarkupRepository::new(dir.path())
        .load(&s)
        .await
        .expect("load");
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].source, "pages/check out.html");
}
