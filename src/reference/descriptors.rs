use serde::{Deserialize, Serialize};

use crate::core::{
    Body, DescriptorInfo, DescriptorLookup, LookupError, ManufacturerInfo, RecordError, Series,
    check_year_range,
};

use super::ReferenceError;

/// One catalog row: a VDS pattern of a manufacturer, valid over a year range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorEntry {
    /// Manufacturer name as returned by the manufacturer lookup.
    pub manufacturer: String,
    /// Leading characters of the lookup prefix this row applies to.
    pub pattern: String,
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub series: Option<Series>,
}

impl DescriptorEntry {
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.manufacturer.trim().is_empty() {
            return Err(RecordError::new("manufacturer", "must not be empty"));
        }
        if self.pattern.len() < 2 || self.pattern.len() > 11 {
            return Err(RecordError::new(
                "pattern",
                format!("must be 2-11 characters, got {}", self.pattern.len()),
            ));
        }
        check_year_range(self.start_year, self.end_year)?;
        if let Some(body) = &self.body {
            body.validate()?;
        }
        if let Some(series) = &self.series {
            series.validate()?;
        }
        Ok(())
    }

    fn matches(&self, manufacturer: &str, prefix: &str, candidate_years: &[i32]) -> bool {
        self.manufacturer.eq_ignore_ascii_case(manufacturer)
            && prefix.starts_with(&self.pattern)
            && candidate_years
                .iter()
                .any(|y| (self.start_year..=self.end_year).contains(y))
    }
}

/// Ordered list of [`DescriptorEntry`] rows.
#[derive(Debug, Clone, Default)]
pub struct DescriptorCatalog {
    entries: Vec<DescriptorEntry>,
}

impl DescriptorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting invalid rows. Errors carry the row's
    /// index in `entries`.
    pub fn from_entries(
        entries: impl IntoIterator<Item = DescriptorEntry>,
    ) -> Result<Self, ReferenceError> {
        let mut catalog = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            catalog
                .push(entry)
                .map_err(|source| ReferenceError::InvalidRecord {
                    table: "descriptor",
                    index,
                    source,
                })?;
        }
        Ok(catalog)
    }

    /// Append a row after validating it.
    pub fn push(&mut self, entry: DescriptorEntry) -> Result<(), RecordError> {
        entry.validate()?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best row for the query: longest matching pattern, earliest on ties.
    pub fn best_match(
        &self,
        manufacturer: &str,
        prefix: &str,
        candidate_years: &[i32],
    ) -> Option<&DescriptorEntry> {
        self.entries
            .iter()
            .filter(|e| e.matches(manufacturer, prefix, candidate_years))
            .fold(None, |best: Option<&DescriptorEntry>, e| match best {
                Some(b) if b.pattern.len() >= e.pattern.len() => Some(b),
                _ => Some(e),
            })
    }
}

impl DescriptorLookup for DescriptorCatalog {
    fn find_descriptor(
        &self,
        manufacturer: &ManufacturerInfo,
        prefix: &str,
        candidate_years: &[i32],
    ) -> Result<DescriptorInfo, LookupError> {
        self.best_match(&manufacturer.manufacturer, prefix, candidate_years)
            .map(|e| DescriptorInfo {
                body: e.body.clone(),
                series: e.series.clone(),
            })
            .ok_or_else(|| LookupError::NotFound {
                key: format!("{} {prefix} {candidate_years:?}", manufacturer.manufacturer),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BodyLayout;

    fn entry(pattern: &str, start_year: i32, end_year: i32) -> DescriptorEntry {
        DescriptorEntry {
            manufacturer: "Honda".into(),
            pattern: pattern.into(),
            start_year,
            end_year,
            body: None,
            series: Some(Series {
                platform: format!("platform-{pattern}"),
                spec: "EX".into(),
                start_year,
                end_year,
            }),
        }
    }

    fn catalog() -> DescriptorCatalog {
        DescriptorCatalog::from_entries([
            entry("1HG", 1990, 2020),
            entry("1HGCM", 2003, 2007),
            entry("1HGCM", 2008, 2012),
        ])
        .unwrap()
    }

    #[test]
    fn longest_pattern_in_year_range() {
        let honda = ManufacturerInfo::new("1HG", "Honda");
        let info = catalog()
            .find_descriptor(&honda, "1HGCM82633A", &[2003])
            .unwrap();
        assert_eq!(info.series.unwrap().platform, "platform-1HGCM");
    }

    #[test]
    fn falls_back_to_shorter_pattern_outside_years() {
        let honda = ManufacturerInfo::new("1HG", "Honda");
        let info = catalog()
            .find_descriptor(&honda, "1HGCM82633A", &[1995])
            .unwrap();
        assert_eq!(info.series.unwrap().platform, "platform-1HG");
    }

    #[test]
    fn any_candidate_year_matches() {
        let entry = catalog()
            .best_match("honda", "1HGCM82633A", &[1979, 2009])
            .cloned()
            .unwrap();
        assert_eq!(entry.start_year, 2008);
    }

    #[test]
    fn empty_years_never_match() {
        let honda = ManufacturerInfo::new("1HG", "Honda");
        assert!(matches!(
            catalog().find_descriptor(&honda, "1HGCM82633A", &[]),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn other_manufacturer_not_matched() {
        let toyota = ManufacturerInfo::new("1HG", "Toyota");
        assert!(catalog().find_descriptor(&toyota, "1HGCM82633A", &[2003]).is_err());
    }

    #[test]
    fn entry_validation_checks_body() {
        let mut e = entry("1HGCM", 2003, 2007);
        e.body = Some(Body {
            code: "CM8".into(),
            layout: BodyLayout::Sedan,
            doors: 0,
            start_year: 2003,
            end_year: 2007,
        });
        assert_eq!(e.validate().unwrap_err().field, "doors");
        assert_eq!(entry("1", 2003, 2007).validate().unwrap_err().field, "pattern");
    }

    #[test]
    fn inverted_years_use_shared_message() {
        let err = entry("1HGCM", 2007, 2003).validate().unwrap_err();
        assert_eq!(err.to_string(), "end_year: end year 2003 precedes start year 2007");
    }

    #[test]
    fn from_entries_reports_index_and_push_validates() {
        let err = DescriptorCatalog::from_entries([entry("1HG", 1990, 2020), entry("1", 2003, 2007)])
            .unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::InvalidRecord {
                table: "descriptor",
                index: 1,
                ..
            }
        ));

        let mut catalog = DescriptorCatalog::new();
        assert!(catalog.push(entry("1HGCM", 2010, 2000)).is_err());
        assert!(catalog.is_empty());
    }
}
