use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::model_year::{DEFAULT_CYCLE_ANCHORS, ModelYearResolver};

/// How a non-numeric serial (positions 11–16) is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerialPolicy {
    /// Record the serial as absent and continue decoding.
    #[default]
    Absent,
    /// Abort decoding with [`DecodeError::SerialParse`](super::DecodeError::SerialParse).
    Strict,
}

/// Decoder settings.
///
/// Deserializable so callers can embed it in their own configuration files;
/// missing fields take their defaults.
///
/// ```
/// use vindecode::core::*;
///
/// let config = DecoderConfig::builder()
///     .anchors([1980, 2010, 2040])
///     .current_year(2025)
///     .serial_policy(SerialPolicy::Strict)
///     .build();
/// assert_eq!(config.current_year(), 2025);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Model-year cycle start years.
    pub anchors: Option<Vec<i32>>,
    /// Fixed decode year; `None` reads the system clock on each decode.
    pub current_year: Option<i32>,
    pub serial_policy: SerialPolicy,
}

impl DecoderConfig {
    pub fn builder() -> DecoderConfigBuilder {
        DecoderConfigBuilder::new()
    }

    /// The year decodes are performed in.
    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Utc::now().year())
    }

    pub fn resolver(&self) -> ModelYearResolver {
        match &self.anchors {
            Some(anchors) => ModelYearResolver::with_anchors(anchors.iter().copied()),
            None => ModelYearResolver::with_anchors(DEFAULT_CYCLE_ANCHORS),
        }
    }
}

/// Builder for [`DecoderConfig`].
pub struct DecoderConfigBuilder {
    anchors: Option<Vec<i32>>,
    current_year: Option<i32>,
    serial_policy: SerialPolicy,
}

impl DecoderConfigBuilder {
    pub fn new() -> Self {
        Self {
            anchors: None,
            current_year: None,
            serial_policy: SerialPolicy::Absent,
        }
    }

    pub fn anchors(mut self, anchors: impl IntoIterator<Item = i32>) -> Self {
        self.anchors = Some(anchors.into_iter().collect());
        self
    }

    /// Pin the decode year instead of reading the clock.
    pub fn current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    pub fn serial_policy(mut self, policy: SerialPolicy) -> Self {
        self.serial_policy = policy;
        self
    }

    pub fn build(self) -> DecoderConfig {
        DecoderConfig {
            anchors: self.anchors,
            current_year: self.current_year,
            serial_policy: self.serial_policy,
        }
    }
}

impl Default for DecoderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
