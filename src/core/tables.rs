//! Constant lookup tables for the VIN check digit and model-year code.
//!
//! All tables are compile-time constants and safe to share across threads.

/// VIN length in characters.
pub const VIN_LENGTH: usize = 17;

/// Index of the check digit within a VIN.
pub const CHECK_DIGIT_POSITION: usize = 8;

/// Index of the model-year code within a VIN.
pub const MODEL_YEAR_POSITION: usize = 9;

/// Letters reserved by ISO 3779 to avoid confusion with `1` and `0`.
pub const RESERVED_LETTERS: [char; 3] = ['I', 'O', 'Q'];

/// Per-position multipliers for the check digit sum.
///
/// Position 8 (the check digit itself) carries weight 0.
pub const POSITION_WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Letter transliteration values (23 letters, I/O/Q excluded).
/// Sorted by letter for binary search.
pub static CHARACTER_WEIGHTS: &[(char, u32)] = &[
    ('A', 1),
    ('B', 2),
    ('C', 3),
    ('D', 4),
    ('E', 5),
    ('F', 6),
    ('G', 7),
    ('H', 8),
    ('J', 1),
    ('K', 2),
    ('L', 3),
    ('M', 4),
    ('N', 5),
    ('P', 7),
    ('R', 9),
    ('S', 2),
    ('T', 3),
    ('U', 4),
    ('V', 5),
    ('W', 6),
    ('X', 7),
    ('Y', 8),
    ('Z', 9),
];

/// Model-year codes in cycle order; the index is the offset from the cycle start.
///
/// `U`, `Z` and `0` are not used as year codes.
pub const MODEL_YEAR_CODES: &str = "ABCDEFGHJKLMNPRSTVWXY123456789";

/// Length of one model-year code cycle.
pub const MODEL_YEAR_CYCLE: i32 = 30;

/// Numeric value of a VIN character for the check digit sum.
///
/// Digits map to themselves, letters through [`CHARACTER_WEIGHTS`].
/// Returns `None` for anything else, including the reserved letters.
pub fn transliterate(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    CHARACTER_WEIGHTS
        .binary_search_by_key(&c, |&(letter, _)| letter)
        .ok()
        .map(|i| CHARACTER_WEIGHTS[i].1)
}

/// Offset (0..30) of a model-year code within its cycle.
pub fn model_year_offset(c: char) -> Option<u32> {
    MODEL_YEAR_CODES
        .chars()
        .position(|code| code == c)
        .map(|i| i as u32)
}

/// Whether `c` may appear anywhere in a VIN.
pub fn is_vin_char(c: char) -> bool {
    (c.is_ascii_digit() || c.is_ascii_uppercase()) && !RESERVED_LETTERS.contains(&c)
}
