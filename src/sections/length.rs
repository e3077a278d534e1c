//! Length sections - base and extended length criteria.

use super::SectionResult;
use crate::types::StrengthInput;

const MIN_SCORED_LENGTH: usize = 8;
const EXTENDED_LENGTH: usize = 15;

/// Checks if the password meets the base length criterion.
///
/// # Returns
/// - `Ok(Some(reason))` if password is shorter than 8 characters
/// - `Ok(None)` if the criterion is met
pub fn length_section(input: &StrengthInput) -> SectionResult {
    if input.password_length < MIN_SCORED_LENGTH {
        return Ok(Some(format!(
            "Password must be at least {} characters",
            MIN_SCORED_LENGTH
        )));
    }
    Ok(None)
}

/// Checks if the password exceeds the extended length threshold.
///
/// # Returns
/// - `Ok(Some(reason))` if password is 15 characters or fewer
/// - `Ok(None)` if the criterion is met
pub fn extended_length_section(input: &StrengthInput) -> SectionResult {
    if input.password_length <= EXTENDED_LENGTH {
        return Ok(Some(format!(
            "Password is not longer than {} characters",
            EXTENDED_LENGTH
        )));
    }
    Ok(None)
}
