//! Filesystem vector store configuration

use qag_domain::value_objects::DistanceMetric;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Filesystem vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemVectorStoreConfig {
    /// Directory holding the manifest and the segment file
    pub base_path: PathBuf,
    /// Vector dimensions (must match embedding dimensions)
    pub dimensions: usize,
    /// Distance metric recorded in the manifest
    pub metric: DistanceMetric,
}

impl FilesystemVectorStoreConfig {
    /// Configuration for a store at `base_path`
    pub fn new(base_path: impl Into<PathBuf>, dimensions: usize) -> Self {
        Self {
            base_path: base_path.into(),
            dimensions,
            metric: DistanceMetric::default(),
        }
    }

    /// Set the distance metric
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }
}
