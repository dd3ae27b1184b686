//! In-memory reference data for the two lookup collaborators.
//!
//! Loads manufacturer and descriptor tables from JSON and answers
//! [`ManufacturerLookup`] / [`DescriptorLookup`] calls against them.
//!
//! # Example
//!
//! ```
//! use vindecode::core::*;
//! use vindecode::reference::ReferenceData;
//!
//! let data = ReferenceData::from_json(r#"{
//!     "manufacturers": [{ "wmi": "1HG", "manufacturer": "Honda" }],
//!     "descriptors": [{
//!         "manufacturer": "Honda", "pattern": "1HGCM",
//!         "start_year": 2003, "end_year": 2007
//!     }]
//! }"#).unwrap();
//!
//! let decoder = VinDecoder::with_config(&data, &data,
//!     DecoderConfig::builder().current_year(2025).build());
//! let vin = decoder.decode("1HGCM82633A004352").unwrap();
//! assert_eq!(vin.manufacturer.manufacturer, "Honda");
//! ```

mod descriptors;
mod manufacturers;

pub use descriptors::{DescriptorCatalog, DescriptorEntry};
pub use manufacturers::ManufacturerTable;

use serde::Deserialize;
use thiserror::Error;

use crate::core::{
    DescriptorInfo, DescriptorLookup, LookupError, ManufacturerInfo, ManufacturerLookup,
    RecordError,
};

/// Errors raised while loading reference data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    /// The JSON document could not be parsed.
    #[error("reference JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed field validation.
    #[error("invalid {table} record #{index}: {source}")]
    InvalidRecord {
        table: &'static str,
        index: usize,
        #[source]
        source: RecordError,
    },

    /// Two manufacturer records share the same prefix.
    #[error("duplicate manufacturer prefix '{0}'")]
    DuplicatePrefix(String),
}

/// Manufacturer table and descriptor catalog loaded together.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub manufacturers: ManufacturerTable,
    pub descriptors: DescriptorCatalog,
}

#[derive(Deserialize)]
struct ReferenceDocument {
    #[serde(default)]
    manufacturers: Vec<ManufacturerInfo>,
    #[serde(default)]
    descriptors: Vec<DescriptorEntry>,
}

impl ReferenceData {
    /// Parse a `{ "manufacturers": [...], "descriptors": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let doc: ReferenceDocument = serde_json::from_str(json)?;

        let manufacturers = ManufacturerTable::from_records(doc.manufacturers)?;
        let descriptors = DescriptorCatalog::from_entries(doc.descriptors)?;

        tracing::debug!(
            manufacturers = manufacturers.len(),
            descriptors = descriptors.len(),
            "loaded reference data"
        );
        Ok(Self {
            manufacturers,
            descriptors,
        })
    }
}

impl ManufacturerLookup for ReferenceData {
    fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
        self.manufacturers.find_manufacturer(prefix)
    }
}

impl DescriptorLookup for ReferenceData {
    fn find_descriptor(
        &self,
        manufacturer: &ManufacturerInfo,
        prefix: &str,
        candidate_years: &[i32],
    ) -> Result<DescriptorInfo, LookupError> {
        self.descriptors
            .find_descriptor(manufacturer, prefix, candidate_years)
    }
}
