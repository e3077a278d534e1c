//! Symbol section - checks whether symbols are part of the pool.

use super::SectionResult;
use crate::types::StrengthInput;

/// Checks if symbol inclusion is active.
///
/// # Returns
/// - `Ok(Some(reason))` if symbols are not included
/// - `Ok(None)` if the criterion is met
pub fn symbol_section(input: &StrengthInput) -> SectionResult {
    if !input.include_symbols {
        return Ok(Some("Special characters are not included".to_string()));
    }
    Ok(None)
}
