//! Storage backend configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which repository backs the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory storage (non-persistent)
    Memory,

    /// JSON array on disk (persistent, single-instance)
    File(FileConfig),
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::File(FileConfig::default())
    }
}

/// File storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Path of the JSON data file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/partners.json")
}

impl Default for FileConfig {
    fn default() -> Self {
        Self { path: default_path() }
    }
}
