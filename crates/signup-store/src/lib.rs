//! # signup-store
//!
//! Storage behind the submission sink.
//!
//! Registrations form an append-only collection ordered by insertion. The
//! sink only ever needs two operations, `append` and `query`, so both
//! backends sit behind [`PartnerRepository`]:
//!
//! - **Memory**: lost on restart, used by tests and throwaway servers
//! - **File**: a single JSON array rewritten on every append
//!
//! [`listing`] builds the searchable, de-duplicated, paged view shown on the
//! list page on top of a repository snapshot.

pub mod config;
pub mod error;
pub mod filter;
pub mod listing;
pub mod storage;

pub use config::{FileConfig, StorageBackend};
pub use error::StoreError;
pub use filter::PartnerFilter;
pub use listing::{ListingPage, ListingQuery};
pub use storage::{open, FileRepository, MemoryRepository, PartnerRepository};
