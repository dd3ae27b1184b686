use std::collections::HashMap;

use crate::core::DecodedVin;

use super::{StoreError, VinKey, VinRecord, VinStore};

/// Insertion-ordered in-memory [`VinStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryVinStore {
    records: Vec<VinRecord>,
    by_full: HashMap<String, usize>,
    next_key: u64,
}

impl MemoryVinStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VinStore for MemoryVinStore {
    fn find_by_full(&self, full: &str) -> Option<VinRecord> {
        self.by_full.get(full).map(|&i| self.records[i].clone())
    }

    fn get(&self, key: VinKey) -> Result<VinRecord, StoreError> {
        self.records
            .iter()
            .find(|r| r.key == key)
            .cloned()
            .ok_or(StoreError::NotFound(key))
    }

    fn insert(&mut self, vin: DecodedVin) -> Result<VinRecord, StoreError> {
        if self.by_full.contains_key(&vin.full) {
            return Err(StoreError::Duplicate(vin.full));
        }
        self.next_key += 1;
        let record = VinRecord {
            key: VinKey(self.next_key),
            vin,
        };
        self.by_full
            .insert(record.vin.full.clone(), self.records.len());
        self.records.push(record.clone());
        Ok(record)
    }

    fn page(&self, page: usize, size: usize) -> Result<Vec<VinRecord>, StoreError> {
        if page == 0 || size == 0 {
            return Err(StoreError::InvalidPage { page, size });
        }
        Ok(self
            .records
            .iter()
            .skip((page - 1).saturating_mul(size))
            .take(size)
            .cloned()
            .collect())
    }
}
