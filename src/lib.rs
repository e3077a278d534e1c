//! Password generation library
//!
//! This library generates random passwords under user-selected constraints
//! (length, digit inclusion, symbol inclusion), scores their strength with
//! a discrete label, and copies them to the system clipboard.
//!
//! # Features
//!
//! - `async` (default): Enables async scoring and copy-feedback timers
//!   with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::GeneratorSession;
//!
//! let mut session = GeneratorSession::new();
//! session.set_length(16);
//! session.set_include_digits(true);
//! session.toggle_show_password();
//!
//! println!("Password: {}", session.display_password());
//! println!("Strength: {}", session.strength());
//! ```
//!
//! The generator and scorer are also usable on their own:
//!
//! ```rust
//! use pwd_generator::{GeneratorOptions, StrengthInput, generate_password};
//!
//! let options = GeneratorOptions {
//!     length: 12,
//!     include_digits: true,
//!     include_symbols: false,
//! };
//! let password = generate_password(&options);
//!
//! #[cfg(feature = "async")]
//! let evaluation = pwd_generator::score_password_strength(
//!     &StrengthInput::from(&options),
//!     None,
//! );
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = pwd_generator::score_password_strength(&StrengthInput::from(&options));
//!
//! println!("Strength: {}", evaluation.strength());
//! ```

// Internal modules
mod alphabet;
mod clipboard;
mod generator;
mod scorer;
mod sections;
mod session;
mod types;

// Public API
pub use clipboard::{ClipboardError, copy_password};
pub use generator::{generate_password, generate_password_with_rng};
pub use scorer::score_password_strength;
pub use session::{COPY_FEEDBACK, GeneratorSession};
pub use types::{
    DEFAULT_LENGTH, GeneratorOptions, MAX_LENGTH, MIN_LENGTH, PasswordStrength, StrengthEvaluation,
    StrengthInput, StrengthScore, StrengthTier, clamp_length,
};

#[cfg(feature = "async")]
pub use scorer::score_password_strength_tx;

#[cfg(feature = "async")]
pub use session::copy_feedback_reset_tx;
