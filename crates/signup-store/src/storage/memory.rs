//! In-memory storage backend

use crate::error::StoreError;
use crate::filter::PartnerFilter;
use crate::storage::PartnerRepository;
use async_trait::async_trait;
use signup_core::Partner;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage backend
///
/// Fast but non-persistent - the collection is lost on restart.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    partners: Arc<RwLock<Vec<Partner>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn with_partners(partners: Vec<Partner>) -> Self {
        Self {
            partners: Arc::new(RwLock::new(partners)),
        }
    }

    /// Number of stored registrations
    pub async fn len(&self) -> usize {
        self.partners.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.partners.read().await.is_empty()
    }
}

#[async_trait]
impl PartnerRepository for MemoryRepository {
    async fn append(&self, partner: Partner) -> Result<(), StoreError> {
        self.partners.write().await.push(partner);
        Ok(())
    }

    async fn query(&self, filter: &PartnerFilter) -> Result<Vec<Partner>, StoreError> {
        let partners = self.partners.read().await;
        Ok(partners.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
