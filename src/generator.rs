//! Password generator - uniform per-position sampling over the active pool.

use rand::Rng;
use secrecy::SecretString;

use crate::alphabet;
use crate::types::GeneratorOptions;

/// Generates a random password using the thread-local random generator.
///
/// Each of the `length` output positions is drawn independently and
/// uniformly from the active pool, with replacement. There is no guarantee
/// that the output contains a digit or a symbol even when the matching flag
/// is on.
pub fn generate_password(options: &GeneratorOptions) -> SecretString {
    generate_password_with_rng(options, &mut rand::thread_rng())
}

/// Generates a random password from a caller-provided generator.
///
/// Useful for deterministic output in tests via a seeded `StdRng`.
pub fn generate_password_with_rng<R: Rng>(options: &GeneratorOptions, rng: &mut R) -> SecretString {
    let pool = alphabet::build(options);

    let password: String = (0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())] as char)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generated {} characters from a pool of {}",
        options.length,
        pool.len()
    );

    SecretString::new(password.into())
}
