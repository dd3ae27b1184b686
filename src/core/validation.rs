use super::check_digit::compute_check_digit;
use super::error::ValidationError;
use super::tables::{CHECK_DIGIT_POSITION, VIN_LENGTH, is_vin_char};

/// Validate a candidate VIN: length, character set, then check digit.
///
/// The input is taken as-is; use [`normalize_vin`] first to accept
/// lowercase or padded input.
///
/// # Errors
///
/// - [`ValidationError::Length`] unless the input has exactly 17 characters
/// - [`ValidationError::IllegalCharacter`] for I, O, Q or anything outside `0-9A-Z`
/// - [`ValidationError::CheckDigit`] when position 8 does not match the computed digit
pub fn validate_vin(candidate: &str) -> Result<(), ValidationError> {
    let found = candidate.chars().count();
    if found != VIN_LENGTH {
        return Err(ValidationError::Length { found });
    }

    if let Some((position, character)) = candidate.chars().enumerate().find(|&(_, c)| !is_vin_char(c)) {
        return Err(ValidationError::IllegalCharacter {
            character,
            position,
        });
    }

    let expected = compute_check_digit(candidate)?;
    let found = candidate.as_bytes()[CHECK_DIGIT_POSITION] as char;
    if found != expected {
        return Err(ValidationError::CheckDigit { found, expected });
    }

    Ok(())
}

/// Whether `candidate` passes [`validate_vin`].
pub fn is_valid_vin(candidate: &str) -> bool {
    validate_vin(candidate).is_ok()
}

/// Trim surrounding whitespace and uppercase ASCII letters.
pub fn normalize_vin(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
