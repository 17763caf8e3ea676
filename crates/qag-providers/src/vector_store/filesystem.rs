//! Filesystem vector store implementation
//!
//! Persistent storage as one append-only segment file plus a manifest
//! recording the dimension and metric. The full record set is mirrored in
//! memory; queries never touch the disk.
//!
//! Inserts append one buffer of frames and fsync before the records become
//! visible. Deletes rewrite the segment into a temporary file and rename
//! it over the original.

mod config;
mod segment;

pub use config::FilesystemVectorStoreConfig;

use crate::constants::{
    FILESYSTEM_FORMAT_VERSION, FILESYSTEM_MANIFEST_FILE, FILESYSTEM_SEGMENT_FILE,
};
use async_trait::async_trait;
use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::{VectorStoreAdmin, VectorStoreProvider};
use qag_domain::value_objects::{
    DistanceMetric, InsertReport, MetadataFilter, RetrievedEvidence, VectorRecord,
};
use segment::{Manifest, decode_frames, encode_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::scan::{StoredRecord, admit, check_query_vector, nearest};

/// Filesystem vector store
pub struct FilesystemVectorStore {
    config: FilesystemVectorStoreConfig,
    records: Arc<RwLock<Vec<StoredRecord>>>,
}

impl FilesystemVectorStore {
    /// Open (or create) the store at `config.base_path`
    ///
    /// # Errors
    /// A configuration error when the directory already holds a store of
    /// another dimension or metric; an I/O error when it cannot be read.
    pub fn open(config: FilesystemVectorStoreConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.base_path).map_err(|e| {
            Error::io_with_source(
                format!("Failed to create {}", config.base_path.display()),
                e,
            )
        })?;

        Self::check_manifest(&config)?;
        let records = Self::load_segment(&config)?;
        debug!(
            path = %config.base_path.display(),
            records = records.len(),
            "Opened filesystem vector store"
        );

        Ok(Self {
            config,
            records: Arc::new(RwLock::new(records)),
        })
    }

    fn manifest_path(&self) -> PathBuf {
        self.config.base_path.join(FILESYSTEM_MANIFEST_FILE)
    }

    fn segment_path(&self) -> PathBuf {
        self.config.base_path.join(FILESYSTEM_SEGMENT_FILE)
    }

    /// Base directory of the store
    pub fn base_path(&self) -> &Path {
        &self.config.base_path
    }

    fn check_manifest(config: &FilesystemVectorStoreConfig) -> Result<()> {
        let path = config.base_path.join(FILESYSTEM_MANIFEST_FILE);
        let expected = Manifest {
            version: FILESYSTEM_FORMAT_VERSION,
            dimensions: config.dimensions,
            metric: config.metric,
        };

        if !path.exists() {
            let content = serde_json::to_vec_pretty(&expected)?;
            return std::fs::write(&path, content).map_err(|e| {
                Error::io_with_source(format!("Failed to write {}", path.display()), e)
            });
        }

        let content = std::fs::read(&path)
            .map_err(|e| Error::io_with_source(format!("Failed to read {}", path.display()), e))?;
        let found: Manifest = serde_json::from_slice(&content)
            .map_err(|e| Error::config(format!("Invalid manifest {}: {e}", path.display())))?;

        if found.version != FILESYSTEM_FORMAT_VERSION {
            return Err(Error::config(format!(
                "Vector store at {} uses format version {}, expected {}",
                config.base_path.display(),
                found.version,
                FILESYSTEM_FORMAT_VERSION
            )));
        }
        if found.dimensions != config.dimensions {
            return Err(Error::config(format!(
                "Vector store at {} holds {}-dimensional vectors but the embedder produces {}",
                config.base_path.display(),
                found.dimensions,
                config.dimensions
            )));
        }
        if found.metric != config.metric {
            return Err(Error::config(format!(
                "Vector store at {} was created with metric {} but {} is configured",
                config.base_path.display(),
                found.metric,
                config.metric
            )));
        }
        Ok(())
    }

    fn load_segment(config: &FilesystemVectorStoreConfig) -> Result<Vec<StoredRecord>> {
        let path = config.base_path.join(FILESYSTEM_SEGMENT_FILE);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };

        let decoded = decode_frames(&bytes, config.dimensions)?;
        if decoded.valid_len < bytes.len() {
            warn!(
                path = %path.display(),
                dropped_bytes = bytes.len() - decoded.valid_len,
                "Discarding partial trailing frame"
            );
            // Later appends must start on a frame boundary
            let file = std::fs::OpenOptions::new()
                .write(true)
                .open(&path)
                .map_err(|e| {
                    Error::io_with_source(format!("Failed to open {}", path.display()), e)
                })?;
            file.set_len(decoded.valid_len as u64).map_err(|e| {
                Error::io_with_source(format!("Failed to truncate {}", path.display()), e)
            })?;
        }
        Ok(decoded.records)
    }

    /// Run a segment mutation on the blocking pool
    ///
    /// The task owns the write guard, so the disk write and the matching
    /// in-memory update complete together even when the caller stops
    /// polling.
    async fn commit<T, F>(&self, mutation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Vec<StoredRecord>, &Path) -> Result<T> + Send + 'static,
    {
        let mut stored = Arc::clone(&self.records).write_owned().await;
        let path = self.segment_path();
        tokio::task::spawn_blocking(move || mutation(&mut stored, &path))
            .await
            .map_err(|e| Error::internal(format!("Blocking task failed: {e}")))?
    }
}

#[async_trait]
impl VectorStoreAdmin for FilesystemVectorStore {
    async fn count(&self, filter: &MetadataFilter) -> Result<usize> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| filter.matches(&r.metadata)).count())
    }

    async fn reset(&self) -> Result<()> {
        self.commit(|stored, path| {
            rewrite_segment(path, &[])?;
            stored.clear();
            Ok(())
        })
        .await
    }

    async fn flush(&self) -> Result<()> {
        let _guard = self.records.read().await;
        let paths = [self.segment_path(), self.manifest_path()];
        tokio::task::spawn_blocking(move || {
            for path in paths {
                if path.exists() {
                    std::fs::File::open(&path)?.sync_all()?;
                }
            }
            Ok::<_, std::io::Error>(())
        })
        .await
        .map_err(|e| Error::internal(format!("Blocking task failed: {e}")))?
        .map_err(|e| Error::store_write(format!("Failed to flush segment: {e}")))
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

#[async_trait]
impl VectorStoreProvider for FilesystemVectorStore {
    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn metric(&self) -> DistanceMetric {
        self.config.metric
    }

    async fn insert(&self, records: Vec<VectorRecord>) -> Result<InsertReport> {
        let dimensions = self.config.dimensions;
        self.commit(move |stored, path| {
            let (admitted, rejected) = admit(records, dimensions, stored);
            if admitted.is_empty() {
                return Ok(InsertReport {
                    accepted: Vec::new(),
                    rejected,
                });
            }

            append_frames(path, &encode_all(&admitted)?)?;

            let accepted = admitted.iter().map(|r| r.id.clone()).collect();
            stored.extend(admitted);
            Ok(InsertReport { accepted, rejected })
        })
        .await
    }

    async fn query(
        &self,
        vector: &[f32],
        k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<RetrievedEvidence>> {
        check_query_vector(vector, self.config.dimensions)?;
        let records = self.records.read().await;
        Ok(nearest(&records, vector, k, filter, self.config.metric))
    }

    async fn delete_by_filter(&self, filter: &MetadataFilter) -> Result<usize> {
        let filter = filter.clone();
        self.commit(move |stored, path| {
            let remaining: Vec<StoredRecord> = stored
                .iter()
                .filter(|r| !filter.matches(&r.metadata))
                .cloned()
                .collect();
            let removed = stored.len() - remaining.len();
            if removed > 0 {
                rewrite_segment(path, &remaining)?;
                *stored = remaining;
            }
            Ok(removed)
        })
        .await
    }
}

/// Append encoded frames, rolling the file back on a failed write
fn append_frames(path: &Path, frames: &[u8]) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let start = file.metadata()?.len();
        if let Err(e) = file.write_all(frames).and_then(|()| file.sync_data()) {
            if let Err(rollback) = file.set_len(start) {
                warn!(
                    path = %path.display(),
                    offset = start,
                    error = %rollback,
                    "Failed to roll back partial append"
                );
            }
            return Err(e);
        }
        Ok(())
    };
    write().map_err(|e| Error::store_write(format!("Failed to append to segment: {e}")))
}

/// Replace the segment with exactly `records`
fn rewrite_segment(path: &Path, records: &[StoredRecord]) -> Result<()> {
    let frames = encode_all(records)?;
    let temp = path.with_extension("log.tmp");
    let write = || -> std::io::Result<()> {
        let mut file = std::fs::File::create(&temp)?;
        file.write_all(&frames)?;
        file.sync_all()?;
        std::fs::rename(&temp, path)
    };
    write().map_err(|e| Error::store_write(format!("Failed to rewrite segment: {e}")))
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use crate::constants::FILESYSTEM_DEFAULT_PATH;
use qag_application::ports::registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreProviderConfig, VectorStoreProviderEntry,
};

/// Factory function for creating filesystem vector store provider instances.
fn filesystem_factory(
    config: &VectorStoreProviderConfig,
) -> std::result::Result<Arc<dyn VectorStoreProvider>, String> {
    let base_path = config
        .uri
        .clone()
        .unwrap_or_else(|| FILESYSTEM_DEFAULT_PATH.to_string());
    let dimensions = config
        .dimensions
        .ok_or_else(|| "filesystem vector store requires dimensions".to_string())?;

    let store = FilesystemVectorStore::open(
        FilesystemVectorStoreConfig::new(base_path, dimensions).with_metric(config.metric),
    )
    .map_err(|e| format!("Failed to open filesystem store: {e}"))?;

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static FILESYSTEM_PROVIDER: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "filesystem",
    description: "Filesystem vector store (persistent append-only segment log)",
    factory: filesystem_factory,
};
