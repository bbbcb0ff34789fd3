//! Form state for the auth popup: field values, the current mode and the last
//! error shown to the user. A `FormState` lives as long as the popup is open
//! and is never persisted.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Which flow the form drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    SignIn,
    SignUp,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    #[must_use]
    pub fn is_sign_up(self) -> bool {
        matches!(self, Self::SignUp)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => write!(formatter, "sign-in"),
            Self::SignUp => write!(formatter, "sign-up"),
        }
    }
}

/// Where a submission stands. `Settled` means at least one attempt completed
/// and none is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Settled,
}

/// Field values typed by the user. `Debug` never prints the password.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    pub email: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: &str, password: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
            email: email.to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
            && self.password.expose_secret().is_empty()
            && self.email.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    mode: Mode,
    credentials: Credentials,
    error_message: Option<String>,
}

impl FormState {
    /// Empty form in sign-in mode, as the popup opens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_username(&mut self, value: &str) {
        self.credentials.username = value.to_string();
    }

    pub fn set_password(&mut self, value: &str) {
        self.credentials.password = SecretString::from(value.to_string());
    }

    /// Email is only collected while signing up; input in sign-in mode is dropped.
    pub fn set_email(&mut self, value: &str) {
        if self.mode.is_sign_up() {
            self.credentials.email = value.to_string();
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn reset_fields(&mut self) {
        self.credentials = Credentials::default();
    }

    /// Flips the mode and drops every field and the error message, so nothing
    /// typed for one flow leaks into the other.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset_fields();
        self.clear_error();
    }
}
