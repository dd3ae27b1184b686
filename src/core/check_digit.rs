use super::error::ValidationError;
use super::tables::{CHECK_DIGIT_POSITION, POSITION_WEIGHTS, VIN_LENGTH, transliterate};

/// Compute the check digit of a 17-character VIN.
///
/// Every character is transliterated, multiplied by its position weight and
/// summed; the sum modulo 11 is the check digit, with 10 written as `X`.
/// The character currently at position 8 never affects the result.
///
/// ```
/// use vindecode::core::compute_check_digit;
///
/// assert_eq!(compute_check_digit("1M8GDM9AXKP042788").unwrap(), 'X');
/// ```
///
/// # Errors
///
/// [`ValidationError::Length`] if the input is not 17 characters, and
/// [`ValidationError::Mapping`] for a character that has no value.
pub fn compute_check_digit(vin: &str) -> Result<char, ValidationError> {
    let found = vin.chars().count();
    if found != VIN_LENGTH {
        return Err(ValidationError::Length { found });
    }

    let mut sum = 0u32;
    for (position, (character, weight)) in vin.chars().zip(POSITION_WEIGHTS).enumerate() {
        let value =
            transliterate(character).ok_or(ValidationError::Mapping { character, position })?;
        sum += value * weight;
    }

    let remainder = (sum % 11) as u8;
    Ok(match remainder {
        10 => 'X',
        r => (b'0' + r) as char,
    })
}

/// Return `vin` with position 8 replaced by its computed check digit.
pub fn with_check_digit(vin: &str) -> Result<String, ValidationError> {
    let check = compute_check_digit(vin)?;
    Ok(vin
        .chars()
        .enumerate()
        .map(|(i, c)| if i == CHECK_DIGIT_POSITION { check } else { c })
        .collect())
}
