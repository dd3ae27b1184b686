use super::config::{DecoderConfig, SerialPolicy};
use super::decompose::decompose;
use super::error::{DecodeError, LookupError};
use super::lookup::{DescriptorLookup, ManufacturerLookup};
use super::model_year::ModelYearResolver;
use super::tables::MODEL_YEAR_POSITION;
use super::types::DecodedVin;
use super::validation::validate_vin;

/// Validates, decomposes and enriches VINs using two lookup collaborators.
///
/// The decoder holds no mutable state; `decode` may be called concurrently
/// whenever the collaborators allow it.
///
/// ```
/// use vindecode::core::*;
///
/// struct Honda;
///
/// impl ManufacturerLookup for Honda {
///     fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
///         match prefix.starts_with("1HG") {
///             true => Ok(ManufacturerInfo::new("1HG", "Honda")),
///             false => Err(LookupError::NotFound { key: prefix.into() }),
///         }
///     }
/// }
///
/// impl DescriptorLookup for Honda {
///     fn find_descriptor(
///         &self,
///         _: &ManufacturerInfo,
///         _: &str,
///         _: &[i32],
///     ) -> Result<DescriptorInfo, LookupError> {
///         Ok(DescriptorInfo::default())
///     }
/// }
///
/// let config = DecoderConfig::builder().current_year(2025).build();
/// let decoder = VinDecoder::with_config(Honda, Honda, config);
/// let vin = decoder.decode("1HGCM82633A004352").unwrap();
/// assert_eq!(vin.serial, Some(4352));
/// assert_eq!(vin.candidate_years, vec![2003]);
/// ```
#[derive(Debug, Clone)]
pub struct VinDecoder<M, D> {
    manufacturers: M,
    descriptors: D,
    resolver: ModelYearResolver,
    config: DecoderConfig,
}

impl<M, D> VinDecoder<M, D>
where
    M: ManufacturerLookup,
    D: DescriptorLookup,
{
    pub fn new(manufacturers: M, descriptors: D) -> Self {
        Self::with_config(manufacturers, descriptors, DecoderConfig::default())
    }

    pub fn with_config(manufacturers: M, descriptors: D, config: DecoderConfig) -> Self {
        Self {
            manufacturers,
            descriptors,
            resolver: config.resolver(),
            config,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode `raw` into a fully populated [`DecodedVin`].
    ///
    /// Stages run in order and the first failure is returned unchanged:
    /// validation, decomposition, manufacturer lookup, model-year
    /// resolution, descriptor lookup. Nothing partial is returned.
    pub fn decode(&self, raw: &str) -> Result<DecodedVin, DecodeError> {
        if let Err(e) = validate_vin(raw) {
            if e.is_defect() {
                tracing::error!(vin = raw, error = %e, "check digit mapping defect");
            } else {
                tracing::debug!(vin = raw, error = %e, "VIN rejected");
            }
            return Err(e.into());
        }

        let (prefix, serial) = decompose(raw);
        if serial.is_none() && self.config.serial_policy == SerialPolicy::Strict {
            return Err(DecodeError::SerialParse(raw[prefix.len()..].to_string()));
        }

        let manufacturer = self
            .manufacturers
            .find_manufacturer(prefix)
            .map_err(|e| {
                tracing::warn!(prefix, error = %e, "manufacturer lookup failed");
                match e {
                    LookupError::NotFound { .. } => DecodeError::ManufacturerNotFound {
                        prefix: prefix.to_string(),
                    },
                    other => DecodeError::ManufacturerLookupFailed(other),
                }
            })?;

        let year_char = raw.as_bytes()[MODEL_YEAR_POSITION] as char;
        let candidate_years = self
            .resolver
            .resolve(year_char, self.config.current_year())?;
        tracing::debug!(
            prefix,
            manufacturer = %manufacturer.manufacturer,
            years = ?candidate_years,
            "resolved model years"
        );

        let descriptor = self
            .descriptors
            .find_descriptor(&manufacturer, prefix, &candidate_years)
            .map_err(|e| {
                tracing::warn!(prefix, error = %e, "descriptor lookup failed");
                match e {
                    LookupError::NotFound { .. } => DecodeError::DescriptorNotFound {
                        manufacturer: manufacturer.manufacturer.clone(),
                        prefix: prefix.to_string(),
                        years: candidate_years.clone(),
                    },
                    other => DecodeError::DescriptorLookupFailed(other),
                }
            })?;

        Ok(DecodedVin {
            full: raw.to_string(),
            wmi: prefix.to_string(),
            serial,
            manufacturer,
            candidate_years,
            descriptor,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::{DescriptorInfo, ManufacturerInfo, ResolutionError, ValidationError};

    struct Fixed;

    impl ManufacturerLookup for Fixed {
        fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
            if prefix.starts_with("1HG") {
                Ok(ManufacturerInfo::new("1HG", "Honda"))
            } else {
                Err(LookupError::NotFound { key: prefix.into() })
            }
        }
    }

    impl DescriptorLookup for Fixed {
        fn find_descriptor(
            &self,
            _manufacturer: &ManufacturerInfo,
            _prefix: &str,
            candidate_years: &[i32],
        ) -> Result<DescriptorInfo, LookupError> {
            if candidate_years.contains(&2003) {
                Ok(DescriptorInfo::default())
            } else {
                Err(LookupError::NotFound { key: "years".into() })
            }
        }
    }

    /// Counts calls so tests can check short-circuiting.
    #[derive(Default)]
    struct Counting {
        calls: Cell<u32>,
    }

    impl ManufacturerLookup for Counting {
        fn find_manufacturer(&self, prefix: &str) -> Result<ManufacturerInfo, LookupError> {
            self.calls.set(self.calls.get() + 1);
            Ok(ManufacturerInfo::new(&prefix[..3], "Any"))
        }
    }

    fn decoder() -> VinDecoder<Fixed, Fixed> {
        VinDecoder::with_config(
            Fixed,
            Fixed,
            DecoderConfig::builder().current_year(2025).build(),
        )
    }

    #[test]
    fn decodes_accord() {
        let vin = decoder().decode("1HGCM82633A004352").unwrap();
        assert_eq!(vin.full, "1HGCM82633A004352");
        assert_eq!(vin.wmi, "1HGCM82633A");
        assert_eq!(vin.serial, Some(4352));
        assert_eq!(vin.manufacturer.manufacturer, "Honda");
        assert_eq!(vin.candidate_years, vec![2003]);
    }

    #[test]
    fn empty_input_is_length_error() {
        assert_eq!(
            decoder().decode(""),
            Err(DecodeError::Validation(ValidationError::Length { found: 0 }))
        );
    }

    #[test]
    fn unknown_manufacturer() {
        let vin = crate::core::with_check_digit("2T1BR32E04C123456").unwrap();
        assert_eq!(
            decoder().decode(&vin),
            Err(DecodeError::ManufacturerNotFound {
                prefix: vin[..11].to_string()
            })
        );
    }

    #[test]
    fn unknown_year_code() {
        // 'U' is a legal VIN character but not a year code.
        let vin = crate::core::with_check_digit("1HGCM8260UA004352").unwrap();
        assert_eq!(
            decoder().decode(&vin),
            Err(DecodeError::Resolution(ResolutionError::UnknownYearChar('U')))
        );
    }

    #[test]
    fn descriptor_not_found() {
        // 'A' resolves to 1980 and 2010, neither known to the fixture.
        let vin = crate::core::with_check_digit("1HGCM8260AA004352").unwrap();
        let err = decoder().decode(&vin).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::DescriptorNotFound { ref years, .. } if years == &vec![1980, 2010]
        ));
    }

    #[test]
    fn validation_failure_skips_lookups() {
        let counting = Counting::default();
        let decoder = VinDecoder::new(&counting, Fixed);
        assert!(decoder.decode("1HGCM82643A004352").is_err());
        assert_eq!(counting.calls.get(), 0);
    }

    #[test]
    fn non_numeric_serial_absent_by_default() {
        let vin = crate::core::with_check_digit("1HGCM82603A00435X").unwrap();
        assert_eq!(decoder().decode(&vin).unwrap().serial, None);
    }

    #[test]
    fn non_numeric_serial_strict() {
        let vin = crate::core::with_check_digit("1HGCM82603A00435X").unwrap();
        let strict = VinDecoder::with_config(
            Fixed,
            Fixed,
            DecoderConfig::builder()
                .current_year(2025)
                .serial_policy(SerialPolicy::Strict)
                .build(),
        );
        assert_eq!(
            strict.decode(&vin),
            Err(DecodeError::SerialParse("00435X".into()))
        );
    }

    #[test]
    fn unavailable_lookup_is_not_not_found() {
        struct Down;
        impl ManufacturerLookup for Down {
            fn find_manufacturer(&self, _: &str) -> Result<ManufacturerInfo, LookupError> {
                Err(LookupError::Unavailable("connection refused".into()))
            }
        }
        impl DescriptorLookup for Down {
            fn find_descriptor(
                &self,
                _: &ManufacturerInfo,
                _: &str,
                _: &[i32],
            ) -> Result<DescriptorInfo, LookupError> {
                Err(LookupError::Unavailable("connection refused".into()))
            }
        }

        let offline = LookupError::Unavailable("connection refused".into());
        let manufacturer_side = VinDecoder::new(Down, Fixed).decode("1HGCM82633A004352");
        assert_eq!(
            manufacturer_side,
            Err(DecodeError::ManufacturerLookupFailed(offline.clone()))
        );

        let descriptor_side = VinDecoder::with_config(
            Fixed,
            Down,
            DecoderConfig::builder().current_year(2025).build(),
        )
        .decode("1HGCM82633A004352");
        assert_eq!(
            descriptor_side,
            Err(DecodeError::DescriptorLookupFailed(offline))
        );
        assert_ne!(manufacturer_side, descriptor_side);
    }
}
