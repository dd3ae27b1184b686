use std::collections::HashMap;

use crate::core::{LookupError, ManufacturerInfo, ManufacturerLookup};

use super::ReferenceError;

/// Manufacturers keyed by registered prefix (2–11 characters).
///
/// Lookups try the longest registered prefix first, so a specific entry
/// such as `"1HGCM"` shadows the broader `"1HG"`.
#[derive(Debug, Clone, Default)]
pub struct ManufacturerTable {
    by_prefix: HashMap<String, ManufacturerInfo>,
}

impl ManufacturerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records, rejecting invalid records and repeated
    /// prefixes. Errors carry the record's index in `records`.
    pub fn from_records(
        records: impl IntoIterator<Item = ManufacturerInfo>,
    ) -> Result<Self, ReferenceError> {
        let mut table = Self::new();
        for (index, info) in records.into_iter().enumerate() {
            table.insert_at(info, index)?;
        }
        Ok(table)
    }

    /// Register one more manufacturer under its `wmi` prefix.
    ///
    /// The error index is the record's position in this table, which matches
    /// the caller's index when records are added in order.
    pub fn insert(&mut self, info: ManufacturerInfo) -> Result<(), ReferenceError> {
        let index = self.len();
        self.insert_at(info, index)
    }

    fn insert_at(&mut self, info: ManufacturerInfo, index: usize) -> Result<(), ReferenceError> {
        info.validate()
            .map_err(|source| ReferenceError::InvalidRecord {
                table: "manufacturer",
                index,
                source,
            })?;
        if self.by_prefix.contains_key(&info.wmi) {
            return Err(ReferenceError::DuplicatePrefix(info.wmi));
        }
        self.by_prefix.insert(info.wmi.clone(), info);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }

    /// Longest registered prefix of `prefix`, between 11 and 2 characters.
    pub fn longest_match(&self, prefix: &str) -> Option<&ManufacturerInfo> {
        let max = prefix.len().min(11);
        (2..=max)
            .rev()
            .filter_map(|len| prefix.get(..len))
            .find_map(|key| self.by_prefix.get(key))
    }
}

impl ManufacturerLookup for ManufacturerTable {
    fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
        self.longest_match(prefix)
            .cloned()
            .ok_or_else(|| LookupError::NotFound { key: prefix.into() })
    }
}
