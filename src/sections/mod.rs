//! Strength scoring sections
//!
//! Each section checks one criterion; a satisfied criterion is worth one
//! point in the final score.

mod digits;
mod length;
mod symbols;

pub use digits::digit_section;
pub use length::{extended_length_section, length_section};
pub use symbols::symbol_section;

/// Result type for section check functions.
/// - `Ok(Some(reason))` - Criterion not met, with reason
/// - `Ok(None)` - Criterion met
/// - `Err(())` - Fatal error during scoring
pub type SectionResult = Result<Option<String>, ()>;
