//! Filesystem markup repository
//!
//! Layout: `<base>/<session>/<source>.html`, with both path components
//! reduced to `[A-Za-z0-9._-]` and suffixed by a short hash of the original
//! name so distinct names never collide. Each file starts with a comment
//! line holding the original source name.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::{MarkupRepository, StoredMarkup};
use qag_domain::value_objects::SessionId;
use sha2::{Digest, Sha256};

use crate::constants::MARKUP_FILE_EXTENSION;

const SOURCE_HEADER_PREFIX: &str = "<!-- qag-source: ";
const SOURCE_HEADER_SUFFIX: &str = " -->\n";

/// Markup stored under a base directory
#[derive(Debug, Clone)]
pub struct FilesystemMarkupRepository {
    base_path: PathBuf,
}

impl FilesystemMarkupRepository {
    /// Create a repository rooted at `base_path`
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Root directory of the repository
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn session_dir(&self, session: &SessionId) -> PathBuf {
        self.base_path.join(safe_component(session.as_str()))
    }
}

/// Filesystem-safe, collision-free rendering of an arbitrary name
fn safe_component(name: &str) -> String {
    let readable: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let digest = Sha256::digest(name.as_bytes());
    let tag: String = digest[..4].iter().map(|b| format!("{b:02x}")).collect();
    format!("{}-{tag}", readable.trim_start_matches('.'))
}

fn parse_stored(content: &str) -> Option<StoredMarkup> {
    let rest = content.strip_prefix(SOURCE_HEADER_PREFIX)?;
    let (source, markup) = rest.split_once(SOURCE_HEADER_SUFFIX)?;
    Some(StoredMarkup {
        source: source.to_string(),
        markup: markup.to_string(),
    })
}

#[async_trait]
impl MarkupRepository for FilesystemMarkupRepository {
    async fn save(&self, session: &SessionId, source: &str, markup: &str) -> Result<()> {
        if source.contains(SOURCE_HEADER_SUFFIX.trim_end()) || source.contains('\n') {
            return Err(Error::invalid_argument(format!(
                "markup source name '{source}' is not storable"
            )));
        }
        let dir = self.session_dir(session);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to create {}", dir.display()), e))?;

        let path = dir.join(format!("{}.{MARKUP_FILE_EXTENSION}", safe_component(source)));
        let content = format!("{SOURCE_HEADER_PREFIX}{source}{SOURCE_HEADER_SUFFIX}{markup}");
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to write {}", path.display()), e))
    }

    async fn load(&self, session: &SessionId) -> Result<Vec<StoredMarkup>> {
        let dir = self.session_dir(session);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read {}", dir.display()),
                    e,
                ));
            }
        };

        let mut pages = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::io_with_source("Failed to read directory entry", e))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(MARKUP_FILE_EXTENSION) {
                continue;
            }
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                Error::io_with_source(format!("Failed to read {}", path.display()), e)
            })?;
            match parse_stored(&content) {
                Some(page) => pages.push(page),
                None => tracing::warn!(path = %path.display(), "Skipping markup file without source header"),
            }
        }

        pages.sort_by(|a, b| a.source.cmp(&b.source));
        Ok(pages)
    }

    async fn delete_session(&self, session: &SessionId) -> Result<usize> {
        let removed = self.load(session).await?.len();
        let dir = self.session_dir(session);
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(removed),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to remove {}", dir.display()),
                e,
            )),
        }
    }
}
