//! Digit section - checks whether digits are part of the pool.

use super::SectionResult;
use crate::types::StrengthInput;

/// Checks if digit inclusion is active.
///
/// # Returns
/// - `Ok(Some(reason))` if digits are not included
/// - `Ok(None)` if the criterion is met
pub fn digit_section(input: &StrengthInput) -> SectionResult {
    if !input.include_digits {
        return Ok(Some("Digits are not included".to_string()));
    }
    Ok(None)
}
