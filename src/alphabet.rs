//! Character pool construction for password generation.

use crate::types::GeneratorOptions;

/// Upper and lowercase ASCII letters, always part of the pool.
pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// ASCII digits, added when digit inclusion is on.
pub const DIGITS: &[u8] = b"0123456789";

/// Fixed symbol set, added when symbol inclusion is on.
pub const SYMBOLS: &[u8] = b"!@#$%^&*-_+=[]{}~`";

/// Builds the pool of characters eligible for sampling under the given
/// options. Letters are always included.
pub fn build(options: &GeneratorOptions) -> Vec<u8> {
    let mut pool = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());
    pool.extend_from_slice(LETTERS);

    if options.include_digits {
        pool.extend_from_slice(DIGITS);
    }
    if options.include_symbols {
        pool.extend_from_slice(SYMBOLS);
    }

    pool
}
