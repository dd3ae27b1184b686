//! Reference-data collaborators consulted by the decoder.

use std::sync::Arc;

use super::error::LookupError;
use super::types::{DescriptorInfo, ManufacturerInfo};

/// Resolves a manufacturer from a VIN prefix (2–11 characters).
pub trait ManufacturerLookup {
    /// Return the manufacturer registered for `prefix`, or
    /// [`LookupError::NotFound`] when none matches.
    fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError>;
}

/// Resolves body/series metadata for a manufacturer, prefix and candidate years.
pub trait DescriptorLookup {
    fn find_descriptor(
        &self,
        manufacturer: &ManufacturerInfo,
        prefix: &str,
        candidate_years: &[i32],
    ) -> Result<DescriptorInfo, LookupError>;
}

impl<T: ManufacturerLookup + ?Sized> ManufacturerLookup for &T {
    fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
        (**self).find_manufacturer(prefix)
    }
}

impl<T: ManufacturerLookup + ?Sized> ManufacturerLookup for Box<T> {
    fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
        (**self).find_manufacturer(prefix)
    }
}

impl<T: ManufacturerLookup + ?Sized> ManufacturerLookup for Arc<T> {
    fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
        (**self).find_manufacturer(prefix)
    }
}

impl<T: DescriptorLookup + ?Sized> DescriptorLookup for &T {
    fn find_descriptor(
        &self,
        manufacturer: &ManufacturerInfo,
        prefix: &str,
        candidate_years: &[i32],
    ) -> Result<DescriptorInfo, LookupError> {
        (**self).find_descriptor(manufacturer, prefix, candidate_years)
    }
}

impl<T: DescriptorLookup + ?Sized> DescriptorLookup for Box<T> {
    fn find_descriptor(
        &self,
        manufacturer: &ManufacturerInfo,
        prefix: &str,
        candidate_years: &[i32],
    ) -> Result<DescriptorInfo, LookupError> {
        (**self).find_descriptor(manufacturer, prefix, candidate_years)
    }
}

impl<T: DescriptorLookup + ?Sized> DescriptorLookup for Arc<T> {
    fn find_descriptor(
        &self,
        manufacturer: &ManufacturerInfo,
        prefix: &str,
        candidate_years: &[i32],
    ) -> Result<DescriptorInfo, LookupError> {
        (**self).find_descriptor(manufacturer, prefix, candidate_years)
    }
}
