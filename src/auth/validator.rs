//! Local checks run before any network call. Sign-in never re-checks password
//! strength so accounts created under an older policy can still log in.

use super::form::{Credentials, Mode};
use secrecy::ExposeSecret;
use thiserror::Error;

/// Minimum password length for new accounts, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields")]
    MissingFields,
    #[error("weak password")]
    WeakPassword,
}

/// Validates credentials for the given mode; the first failing rule wins.
///
/// # Errors
/// Returns `MissingFields` when username or password is empty, and
/// `WeakPassword` when a sign-up password fails [`password_is_strong`].
pub fn validate(mode: Mode, credentials: &Credentials) -> Result<(), ValidationError> {
    let password = credentials.password.expose_secret();

    if credentials.username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if mode.is_sign_up() && !password_is_strong(password) {
        return Err(ValidationError::WeakPassword);
    }

    Ok(())
}

/// At least 8 characters with a digit, a lowercase and an uppercase letter,
/// and no whitespace anywhere.
#[must_use]
pub fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && !password.chars().any(char::is_whitespace)
}
