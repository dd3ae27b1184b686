use serde::{Deserialize, Serialize};

use super::decompose::{Region, VinSections};
use super::error::{RecordError, ValidationError};

/// A fully decoded VIN.
///
/// Built once by [`VinDecoder::decode`](super::VinDecoder::decode) and not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedVin {
    /// The 17-character input.
    pub full: String,
    /// WMI + VDS lookup prefix (positions 0–10).
    pub wmi: String,
    /// Production serial (positions 11–16); `None` when not numeric.
    pub serial: Option<u32>,
    /// Manufacturer record returned by the WMI lookup.
    pub manufacturer: ManufacturerInfo,
    /// Plausible model years, oldest first. May be empty.
    pub candidate_years: Vec<i32>,
    /// Body/series record returned by the VDS lookup.
    pub descriptor: DescriptorInfo,
}

impl DecodedVin {
    /// Positional view over [`full`](Self::full).
    ///
    /// Fails only if `full` was modified after decoding.
    pub fn sections(&self) -> Result<VinSections<'_>, ValidationError> {
        VinSections::new(&self.full)
    }

    pub fn region(&self) -> Region {
        self.full
            .chars()
            .next()
            .map_or(Region::Unassigned, Region::from_wmi_char)
    }

    /// The latest plausible model year.
    pub fn most_recent_year(&self) -> Option<i32> {
        self.candidate_years.last().copied()
    }
}

/// Manufacturer identity as returned by the WMI lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManufacturerInfo {
    /// The prefix this record is registered under (2–11 characters).
    pub wmi: String,
    /// Manufacturer name (e.g. "Honda").
    pub manufacturer: String,
    /// Country of manufacture, if known.
    #[serde(default)]
    pub country: Option<String>,
}

impl ManufacturerInfo {
    pub fn new(wmi: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            wmi: wmi.into(),
            manufacturer: manufacturer.into(),
            country: None,
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if !(2..=11).contains(&self.wmi.len()) {
            return Err(RecordError::new(
                "wmi",
                format!("prefix must be 2-11 characters, got {}", self.wmi.len()),
            ));
        }
        if self.manufacturer.trim().is_empty() {
            return Err(RecordError::new("manufacturer", "must not be empty"));
        }
        Ok(())
    }
}

/// Vehicle descriptor metadata as returned by the VDS lookup collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorInfo {
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub series: Option<Series>,
}

/// Body style classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLayout {
    Sedan,
    Coupe,
    Hatchback,
    Van,
    PickupTruck,
    StationWagon,
    Convertible,
    Suv,
    Fastback,
}

/// A body variant produced over a range of model years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub code: String,
    pub layout: BodyLayout,
    pub doors: u8,
    pub start_year: i32,
    pub end_year: i32,
}

impl Body {
    /// Whether `year` falls within the production range (inclusive).
    pub fn covers(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.code.trim().is_empty() {
            return Err(RecordError::new("code", "must not be empty"));
        }
        if self.doors == 0 {
            return Err(RecordError::new("doors", "must be at least 1"));
        }
        check_year_range(self.start_year, self.end_year)
    }
}

/// A model series (platform + trim spec) produced over a range of model years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub platform: String,
    pub spec: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl Series {
    /// Whether `year` falls within the production range (inclusive).
    pub fn covers(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.platform.trim().is_empty() {
            return Err(RecordError::new("platform", "must not be empty"));
        }
        check_year_range(self.start_year, self.end_year)
    }
}

pub(crate) fn check_year_range(start: i32, end: i32) -> Result<(), RecordError> {
    if start > end {
        return Err(RecordError::new(
            "end_year",
            format!("end year {end} precedes start year {start}"),
        ));
    }
    Ok(())
}
