//! Storage backends for the submission sink

use crate::config::StorageBackend;
use crate::error::StoreError;
use crate::filter::PartnerFilter;
use async_trait::async_trait;
use signup_core::Partner;
use std::sync::Arc;

pub mod file;
pub mod memory;

pub use file::FileRepository;
pub use memory::MemoryRepository;

/// Append-only collection of registrations, ordered by insertion
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// Store a new registration at the end of the collection
    async fn append(&self, partner: Partner) -> Result<(), StoreError>;

    /// Registrations matching the filter, in insertion order
    async fn query(&self, filter: &PartnerFilter) -> Result<Vec<Partner>, StoreError>;

    /// Every registration, in insertion order
    async fn all(&self) -> Result<Vec<Partner>, StoreError> {
        self.query(&PartnerFilter::default()).await
    }

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

/// Create the repository selected by the configuration
pub async fn open(backend: &StorageBackend) -> Result<Arc<dyn PartnerRepository>, StoreError> {
    match backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryRepository::new())),
        StorageBackend::File(config) => {
            let repository = FileRepository::open(config.clone()).await?;
            Ok(Arc::new(repository))
        }
    }
}
