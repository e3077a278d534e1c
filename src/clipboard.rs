//! Clipboard integration module
//!
//! Writes the generated password to the system clipboard as plain text.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Unavailable(String),
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Writes the password to the system clipboard.
///
/// Write-only: previous clipboard contents are neither read nor restored.
/// This function never prints or logs the copied value.
///
/// # Errors
///
/// Returns error if:
/// - The platform clipboard cannot be opened (e.g. headless session)
/// - The write itself fails (e.g. permission denial)
pub fn copy_password(password: &SecretString) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    clipboard
        .set_text(password.expose_secret().to_owned())
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

    #[cfg(feature = "tracing")]
    tracing::info!("password copied to clipboard");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_copy_password_does_not_panic() {
        let pwd = SecretString::new("Abc123!xyz".to_string().into());
        // Headless environments have no clipboard; failure is acceptable,
        // panicking is not
        match copy_password(&pwd) {
            Ok(()) => {}
            Err(ClipboardError::Unavailable(_)) | Err(ClipboardError::WriteFailed(_)) => {}
        }
    }

    #[test]
    fn test_error_messages() {
        let err = ClipboardError::Unavailable("no display".to_string());
        assert_eq!(err.to_string(), "Failed to access clipboard: no display");

        let err = ClipboardError::WriteFailed("denied".to_string());
        assert_eq!(err.to_string(), "Failed to write to clipboard: denied");
    }
}
