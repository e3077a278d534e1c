//! Generator session - the form state behind an interactive frontend.
//!
//! Holds the current options and password, regenerates when an option
//! changes, and tracks the transient "Copied!" acknowledgment. Frontends
//! drive it with plain setters; no reactivity framework is assumed.

use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::clipboard;
use crate::generator::generate_password;
use crate::scorer::score_password_strength;
use crate::types::{
    GeneratorOptions, PasswordStrength, StrengthEvaluation, StrengthInput, clamp_length,
};

/// How long the copy acknowledgment stays visible.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(1500);

/// In-memory state of one generator form.
///
/// A fresh password is generated at construction and after every effective
/// option change, exactly once per change. All state is dropped with the
/// session; nothing is persisted.
pub struct GeneratorSession {
    options: GeneratorOptions,
    password: SecretString,
    show_password: bool,
    copied_at: Option<Instant>,
    generations: u64,
}

impl GeneratorSession {
    /// Creates a session with the default options and an initial password.
    pub fn new() -> Self {
        let options = GeneratorOptions::default();
        Self {
            password: generate_password(&options),
            options,
            show_password: false,
            copied_at: None,
            generations: 1,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn length(&self) -> usize {
        self.options.length
    }

    pub fn include_digits(&self) -> bool {
        self.options.include_digits
    }

    pub fn include_symbols(&self) -> bool {
        self.options.include_symbols
    }

    /// The current password. Exposed for display and clipboard wiring only.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Number of generation calls so far, the initial one included.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Sets the target length, clamped to the supported range.
    /// Regenerates only when the clamped value differs from the current one.
    pub fn set_length(&mut self, length: usize) {
        let length = clamp_length(length);
        if self.options.length != length {
            self.options.length = length;
            self.regenerate();
        }
    }

    /// Regenerates only when the flag actually changes.
    pub fn set_include_digits(&mut self, include: bool) {
        if self.options.include_digits != include {
            self.options.include_digits = include;
            self.regenerate();
        }
    }

    /// Regenerates only when the flag actually changes.
    pub fn set_include_symbols(&mut self, include: bool) {
        if self.options.include_symbols != include {
            self.options.include_symbols = include;
            self.regenerate();
        }
    }

    pub fn toggle_digits(&mut self) {
        self.set_include_digits(!self.options.include_digits);
    }

    pub fn toggle_symbols(&mut self) {
        self.set_include_symbols(!self.options.include_symbols);
    }

    /// Draws a new password from the current options.
    pub fn regenerate(&mut self) {
        self.password = generate_password(&self.options);
        self.generations += 1;
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Renders the password for display: cleartext when unmasked, one
    /// bullet per character when masked.
    pub fn display_password(&self) -> String {
        let password = self.password.expose_secret();
        if self.show_password {
            password.to_string()
        } else {
            "\u{2022}".repeat(password.len())
        }
    }

    /// Scores the current password and returns the full evaluation.
    pub fn evaluation(&self) -> StrengthEvaluation {
        let input = StrengthInput::new(
            self.password.expose_secret().len(),
            self.options.include_digits,
            self.options.include_symbols,
        );

        #[cfg(feature = "async")]
        let evaluation = score_password_strength(&input, None);

        #[cfg(not(feature = "async"))]
        let evaluation = score_password_strength(&input);

        evaluation
    }

    pub fn strength(&self) -> PasswordStrength {
        self.evaluation().strength()
    }

    /// Copies the current password to the system clipboard and arms the
    /// acknowledgment.
    ///
    /// The acknowledgment is optimistic: a clipboard failure is logged when
    /// the `tracing` feature is on and otherwise ignored.
    pub fn copy_to_clipboard(&mut self) {
        if let Err(_e) = clipboard::copy_password(&self.password) {
            #[cfg(feature = "tracing")]
            tracing::warn!("clipboard write failed: {}", _e);
        }
        self.copied_at = Some(Instant::now());
    }

    /// True until [`COPY_FEEDBACK`] has elapsed since the most recent copy.
    /// Every copy refreshes the deadline.
    pub fn copied(&self) -> bool {
        self.copied_at
            .map(|at| at.elapsed() < COPY_FEEDBACK)
            .unwrap_or(false)
    }

    /// Clears the acknowledgment, typically on a reset signal from
    /// [`copy_feedback_reset_tx`].
    pub fn clear_copied(&mut self) {
        self.copied_at = None;
    }
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Async timer that signals the acknowledgment reset via channel.
///
/// Sleeps for [`COPY_FEEDBACK`], then sends unless the token was cancelled
/// in the meantime. Cancel the token when the session is torn down so the
/// timer never acts on released state.
#[cfg(feature = "async")]
pub async fn copy_feedback_reset_tx(token: CancellationToken, tx: mpsc::Sender<()>) {
    tokio::time::sleep(COPY_FEEDBACK).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("copy feedback reset cancelled");
        return;
    }

    if let Err(e) = tx.send(()).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send copy feedback reset: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;
    use serial_test::serial;

    #[test]
    fn test_session_defaults() {
        let session = GeneratorSession::new();
        assert_eq!(session.length(), 8);
        assert!(!session.include_digits());
        assert!(!session.include_symbols());
        assert!(!session.show_password());
        assert!(!session.copied());
        assert_eq!(session.generations(), 1);
        assert_eq!(session.password().expose_secret().len(), 8);
    }

    #[test]
    fn test_set_length_regenerates_once() {
        let mut session = GeneratorSession::new();
        session.set_length(12);
        assert_eq!(session.generations(), 2);
        assert_eq!(session.password().expose_secret().len(), 12);
    }

    #[test]
    fn test_set_length_unchanged_does_not_regenerate() {
        let mut session = GeneratorSession::new();
        session.set_length(8);
        assert_eq!(session.generations(), 1);
    }

    #[test]
    fn test_set_length_clamps_to_bounds() {
        let mut session = GeneratorSession::new();
        session.set_length(100);
        assert_eq!(session.length(), 32);
        session.set_length(1);
        assert_eq!(session.length(), 6);
        assert_eq!(session.password().expose_secret().len(), 6);
    }

    #[test]
    fn test_set_length_clamped_to_current_does_not_regenerate() {
        let mut session = GeneratorSession::new();
        session.set_length(6);
        let generations = session.generations();
        // Clamps back to the current value
        session.set_length(3);
        assert_eq!(session.generations(), generations);
    }

    #[test]
    fn test_toggle_digits_regenerates_with_new_pool() {
        let mut session = GeneratorSession::new();
        session.set_length(32);
        session.toggle_digits();
        assert!(session.include_digits());
        assert_eq!(session.generations(), 3);
        assert!(
            session
                .password()
                .expose_secret()
                .bytes()
                .all(|b| alphabet::LETTERS.contains(&b) || alphabet::DIGITS.contains(&b))
        );
    }

    #[test]
    fn test_set_flag_unchanged_does_not_regenerate() {
        let mut session = GeneratorSession::new();
        session.set_include_digits(false);
        session.set_include_symbols(false);
        assert_eq!(session.generations(), 1);
    }

    #[test]
    fn test_regenerate_always_draws() {
        let mut session = GeneratorSession::new();
        session.regenerate();
        session.regenerate();
        assert_eq!(session.generations(), 3);
    }

    #[test]
    fn test_display_password_masked_by_default() {
        let session = GeneratorSession::new();
        assert_eq!(session.display_password(), "\u{2022}".repeat(8));
    }

    #[test]
    fn test_display_password_unmasked_after_toggle() {
        let mut session = GeneratorSession::new();
        session.toggle_show_password();
        assert_eq!(
            session.display_password(),
            session.password().expose_secret()
        );
    }

    #[test]
    fn test_default_strength_is_medium() {
        // Length 8 satisfies exactly one criterion
        let session = GeneratorSession::new();
        assert_eq!(session.strength(), PasswordStrength::Medium);
    }

    #[test]
    fn test_strength_follows_options() {
        let mut session = GeneratorSession::new();
        session.set_length(16);
        session.set_include_digits(true);
        session.set_include_symbols(true);
        // All four criteria met: the label table overruns to Very Weak
        assert_eq!(session.strength(), PasswordStrength::VeryWeak);
    }

    #[test]
    #[serial]
    fn test_copy_arms_acknowledgment() {
        let mut session = GeneratorSession::new();
        session.copy_to_clipboard();
        assert!(session.copied());
        session.clear_copied();
        assert!(!session.copied());
    }

    #[test]
    #[serial]
    fn test_copy_acknowledgment_expires() {
        let mut session = GeneratorSession::new();
        session.copy_to_clipboard();
        assert!(session.copied());
        std::thread::sleep(COPY_FEEDBACK + Duration::from_millis(100));
        assert!(!session.copied());
    }

    #[test]
    #[serial]
    fn test_copy_refreshes_the_deadline() {
        let mut session = GeneratorSession::new();
        session.copy_to_clipboard();
        std::thread::sleep(Duration::from_millis(1000));
        session.copy_to_clipboard();
        std::thread::sleep(Duration::from_millis(700));
        // 1.7s after the first copy, 0.7s after the second
        assert!(session.copied());
    }
}
