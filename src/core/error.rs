use thiserror::Error;

/// Reasons a candidate string is not a syntactically and arithmetically valid VIN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// Input is not exactly 17 characters long.
    #[error("VIN must be 17 characters, got {found}")]
    Length { found: usize },

    /// Input contains a reserved letter (I, O, Q) or a character outside `0-9A-Z`.
    #[error("illegal character '{character}' at position {position}")]
    IllegalCharacter { character: char, position: usize },

    /// The check digit at position 8 does not match the computed one.
    #[error("check digit '{found}' is invalid, expected '{expected}'")]
    CheckDigit { found: char, expected: char },

    /// A character could not be scored during check digit computation.
    ///
    /// Unreachable after charset validation; indicates a defect in the caller.
    #[error("cannot map character '{character}' at position {position} to a check digit value")]
    Mapping { character: char, position: usize },
}

impl ValidationError {
    /// Whether this error is a defect rather than a user input problem.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Mapping { .. })
    }
}

/// Errors from model-year resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolutionError {
    /// The model-year character has no table entry.
    #[error("unknown model year code '{0}'")]
    UnknownYearChar(char),
}

/// Errors returned by lookup collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// No reference entry matched the key.
    #[error("no entry found for '{key}'")]
    NotFound { key: String },

    /// The backing reference source could not be consulted.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort [`VinDecoder::decode`](super::VinDecoder::decode).
///
/// Each variant names the pipeline stage that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Length, charset or check digit validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The serial could not be parsed under [`SerialPolicy::Strict`](super::SerialPolicy::Strict).
    #[error("serial '{0}' is not numeric")]
    SerialParse(String),

    /// The manufacturer lookup did not recognise the prefix.
    #[error("manufacturer not found for prefix '{prefix}'")]
    ManufacturerNotFound { prefix: String },

    /// The model-year code has no table entry.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The descriptor lookup found no body/series entry.
    #[error("descriptor not found for {manufacturer} prefix '{prefix}' in years {years:?}")]
    DescriptorNotFound {
        manufacturer: String,
        prefix: String,
        years: Vec<i32>,
    },

    /// The manufacturer lookup failed for a reason other than "not found".
    #[error("manufacturer lookup failed: {0}")]
    ManufacturerLookupFailed(LookupError),

    /// The descriptor lookup failed for a reason other than "not found".
    #[error("descriptor lookup failed: {0}")]
    DescriptorLookupFailed(LookupError),
}

impl DecodeError {
    /// Whether this error is a defect rather than a user input problem.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Validation(e) if e.is_defect())
    }
}

/// A reference record (body, series, manufacturer) with inconsistent fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    /// Name of the offending field (e.g. "end_year").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for RecordError {}

impl RecordError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
