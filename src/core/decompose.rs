use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::tables::{CHECK_DIGIT_POSITION, MODEL_YEAR_POSITION, VIN_LENGTH, is_vin_char};

/// Length of the WMI + VDS (+ year, plant) prefix used as the lookup key.
pub const PREFIX_LENGTH: usize = 11;

/// Split a validated VIN into its 11-character lookup prefix and numeric serial.
///
/// The serial (positions 11–16) is `None` when it is not purely numeric.
/// Input that is not 17 ASCII characters yields an empty prefix and no serial
/// rather than panicking; run [`validate_vin`](super::validate_vin) first.
pub fn decompose(vin: &str) -> (&str, Option<u32>) {
    let prefix = vin.get(..PREFIX_LENGTH).unwrap_or_default();
    let serial = vin.get(PREFIX_LENGTH..).and_then(parse_serial);
    (prefix, serial)
}

/// Parse a serial number made only of ASCII digits.
pub fn parse_serial(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Borrowed positional view over a 17-character VIN.
///
/// ```
/// use vindecode::core::VinSections;
///
/// let s = VinSections::new("1HGCM82633A004352").unwrap();
/// assert_eq!(s.wmi(), "1HG");
/// assert_eq!(s.vds(), "CM8263");
/// assert_eq!(s.vis(), "3A004352");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VinSections<'a> {
    vin: &'a str,
}

impl<'a> VinSections<'a> {
    /// Wrap a VIN after checking its length and character set.
    ///
    /// The check digit is not verified here.
    pub fn new(vin: &'a str) -> Result<Self, ValidationError> {
        let found = vin.chars().count();
        if found != VIN_LENGTH {
            return Err(ValidationError::Length { found });
        }
        if let Some((position, character)) = vin.chars().enumerate().find(|&(_, c)| !is_vin_char(c)) {
            return Err(ValidationError::IllegalCharacter {
                character,
                position,
            });
        }
        Ok(Self { vin })
    }

    /// The full VIN.
    pub fn as_str(&self) -> &'a str {
        self.vin
    }

    /// World Manufacturer Identifier, positions 0–2.
    pub fn wmi(&self) -> &'a str {
        &self.vin[..3]
    }

    /// Vehicle Descriptor Section, positions 3–8 (including the check digit).
    pub fn vds(&self) -> &'a str {
        &self.vin[3..9]
    }

    /// Vehicle Identifier Section, positions 9–16.
    pub fn vis(&self) -> &'a str {
        &self.vin[9..]
    }

    /// Lookup prefix, positions 0–10.
    pub fn prefix(&self) -> &'a str {
        &self.vin[..PREFIX_LENGTH]
    }

    pub fn check_digit(&self) -> char {
        self.byte_at(CHECK_DIGIT_POSITION)
    }

    pub fn model_year_code(&self) -> char {
        self.byte_at(MODEL_YEAR_POSITION)
    }

    /// Assembly plant code, position 10.
    pub fn plant_code(&self) -> char {
        self.byte_at(10)
    }

    /// Production sequence text, positions 11–16.
    pub fn serial_text(&self) -> &'a str {
        &self.vin[PREFIX_LENGTH..]
    }

    pub fn serial(&self) -> Option<u32> {
        parse_serial(self.serial_text())
    }

    pub fn region(&self) -> Region {
        Region::from_wmi_char(self.byte_at(0))
    }

    fn byte_at(&self, i: usize) -> char {
        self.vin.as_bytes()[i] as char
    }
}

/// Geographic region encoded by the first WMI character (ISO 3780).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
    Unassigned,
}

impl Region {
    pub fn from_wmi_char(c: char) -> Self {
        match c {
            'A'..='H' => Self::Africa,
            'J'..='R' => Self::Asia,
            'S'..='Z' => Self::Europe,
            '1'..='5' => Self::NorthAmerica,
            '6' | '7' => Self::Oceania,
            '8' | '9' => Self::SouthAmerica,
            _ => Self::Unassigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_prefix_and_serial() {
        assert_eq!(decompose("1HGCM82633A004352"), ("1HGCM82633A", Some(4352)));
    }

    #[test]
    fn non_numeric_serial_is_absent() {
        assert_eq!(decompose("1HGCM82633A00435X"), ("1HGCM82633A", None));
    }

    #[test]
    fn short_input_does_not_panic() {
        assert_eq!(decompose(""), ("", None));
        assert_eq!(decompose("1HG"), ("", None));
    }

    #[test]
    fn serial_rejects_sign_and_whitespace() {
        assert_eq!(parse_serial("+12345"), None);
        assert_eq!(parse_serial(" 12345"), None);
        assert_eq!(parse_serial(""), None);
        assert_eq!(parse_serial("000000"), Some(0));
        assert_eq!(parse_serial("999999"), Some(999_999));
    }

    #[test]
    fn sections() {
        let s = VinSections::new("1HGCM82633A004352").unwrap();
        assert_eq!(s.wmi(), "1HG");
        assert_eq!(s.vds(), "CM8263");
        assert_eq!(s.check_digit(), '3');
        assert_eq!(s.model_year_code(), '3');
        assert_eq!(s.plant_code(), 'A');
        assert_eq!(s.vis(), "3A004352");
        assert_eq!(s.prefix(), "1HGCM82633A");
        assert_eq!(s.serial_text(), "004352");
        assert_eq!(s.serial(), Some(4352));
        assert_eq!(s.region(), Region::NorthAmerica);
    }

    #[test]
    fn sections_reject_bad_input() {
        assert!(VinSections::new("1HG").is_err());
        assert!(VinSections::new("1HGCM82633O004352").is_err());
    }

    #[test]
    fn regions() {
        assert_eq!(Region::from_wmi_char('W'), Region::Europe);
        assert_eq!(Region::from_wmi_char('J'), Region::Asia);
        assert_eq!(Region::from_wmi_char('A'), Region::Africa);
        assert_eq!(Region::from_wmi_char('6'), Region::Oceania);
        assert_eq!(Region::from_wmi_char('9'), Region::SouthAmerica);
        assert_eq!(Region::from_wmi_char('0'), Region::Unassigned);
    }
}
