//! JSON file storage backend

use crate::config::FileConfig;
use crate::error::StoreError;
use crate::filter::PartnerFilter;
use crate::storage::PartnerRepository;
use async_trait::async_trait;
use signup_core::Partner;
use std::path::Path;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// File storage backend
///
/// Stores the whole collection as one JSON array. Every append reads the
/// file, pushes the record and rewrites the file; the write lock keeps
/// concurrent appends from this process from losing records.
pub struct FileRepository {
    config: FileConfig,
    write_lock: Mutex<()>,
}

impl FileRepository {
    /// Open the data file, creating it (and its directory) as `[]` if absent
    pub async fn open(config: FileConfig) -> Result<Self, StoreError> {
        let path = &config.path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        if !fs::try_exists(path).await.map_err(|e| StoreError::io(path, e))? {
            fs::write(path, "[]")
                .await
                .map_err(|e| StoreError::io(path, e))?;
            info!("Created empty data file {:?}", path);
        }

        Ok(Self {
            config,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    async fn read_all(&self) -> Result<Vec<Partner>, StoreError> {
        let path = self.path();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::io(path, e))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[async_trait]
impl PartnerRepository for FileRepository {
    async fn append(&self, partner: Partner) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut partners = self.read_all().await?;
        partners.push(partner);

        let json = serde_json::to_string_pretty(&partners)?;
        fs::write(self.path(), json)
            .await
            .map_err(|e| StoreError::io(self.path(), e))?;

        debug!("Stored partner #{} in {:?}", partners.len(), self.path());
        Ok(())
    }

    async fn query(&self, filter: &PartnerFilter) -> Result<Vec<Partner>, StoreError> {
        let partners = self.read_all().await?;
        Ok(partners.into_iter().filter(|p| filter.matches(p)).collect())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
