use serde::{Deserialize, Serialize};

use super::error::ResolutionError;
use super::tables::model_year_offset;

/// Cycle start years used when no anchors are configured.
pub const DEFAULT_CYCLE_ANCHORS: [i32; 2] = [1980, 2010];

/// Resolve a model-year code against the default anchors (1980, 2010).
///
/// Only years strictly before `current_year` are returned, oldest first.
/// An empty result is valid.
///
/// ```
/// use vindecode::core::resolve_years;
///
/// assert_eq!(resolve_years('A', 2025).unwrap(), vec![1980, 2010]);
/// assert_eq!(resolve_years('Y', 2005).unwrap(), vec![2000]);
/// ```
pub fn resolve_years(year_char: char, current_year: i32) -> Result<Vec<i32>, ResolutionError> {
    ModelYearResolver::default().resolve(year_char, current_year)
}

/// Maps a model-year code to candidate calendar years over configured cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelYearResolver {
    anchors: Vec<i32>,
}

impl Default for ModelYearResolver {
    fn default() -> Self {
        Self {
            anchors: DEFAULT_CYCLE_ANCHORS.to_vec(),
        }
    }
}

impl ModelYearResolver {
    /// Use the given cycle start years. They are sorted and deduplicated
    /// so output stays in ascending order.
    pub fn with_anchors(anchors: impl IntoIterator<Item = i32>) -> Self {
        let mut anchors: Vec<i32> = anchors.into_iter().collect();
        anchors.sort_unstable();
        anchors.dedup();
        Self { anchors }
    }

    pub fn anchors(&self) -> &[i32] {
        &self.anchors
    }

    /// Candidate years for `year_char`, each strictly before `current_year`.
    pub fn resolve(&self, year_char: char, current_year: i32) -> Result<Vec<i32>, ResolutionError> {
        let offset = model_year_offset(year_char).ok_or(ResolutionError::UnknownYearChar(year_char))?;
        Ok(self
            .anchors
            .iter()
            .map(|start| start + offset as i32)
            .filter(|&year| year < current_year)
            .collect())
    }
}
