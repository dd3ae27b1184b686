//! Find-or-insert persistence for decoded VINs.
//!
//! The decoder never persists anything; callers that want "reuse the
//! existing record for this VIN" semantics go through a [`VinStore`].

mod memory;

pub use memory::MemoryVinStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::DecodedVin;

/// Opaque record key assigned by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VinKey(pub u64);

impl std::fmt::Display for VinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored VIN together with its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinRecord {
    pub key: VinKey,
    pub vin: DecodedVin,
}

/// Errors from a [`VinStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("no record with key {0}")]
    NotFound(VinKey),

    #[error("a record for VIN {0} already exists")]
    Duplicate(String),

    /// Pages are 1-based and must hold at least one record.
    #[error("invalid page {page} of size {size}")]
    InvalidPage { page: usize, size: usize },
}

/// Storage collaborator for decoded VINs.
pub trait VinStore {
    fn find_by_full(&self, full: &str) -> Option<VinRecord>;

    fn get(&self, key: VinKey) -> Result<VinRecord, StoreError>;

    /// Store a new record; fails with [`StoreError::Duplicate`] if the full VIN exists.
    fn insert(&mut self, vin: DecodedVin) -> Result<VinRecord, StoreError>;

    /// One page of records in insertion order.
    fn page(&self, page: usize, size: usize) -> Result<Vec<VinRecord>, StoreError>;

    /// Return the existing record for `vin.full`, or insert it.
    fn find_or_insert(&mut self, vin: DecodedVin) -> Result<VinRecord, StoreError> {
        if let Some(existing) = self.find_by_full(&vin.full) {
            tracing::debug!(vin = %vin.full, key = %existing.key, "reusing stored VIN");
            return Ok(existing);
        }
        self.insert(vin)
    }
}
