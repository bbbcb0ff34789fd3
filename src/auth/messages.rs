//! User-facing strings for each outcome. French is what the popup shipped
//! with; English is the default for the terminal host.

use super::{form::Mode, outcome::Outcome, validator::ValidationError};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            "fr" | "fr-fr" | "french" | "français" => Ok(Self::Fr),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    pub missing_fields: &'static str,
    pub weak_password: &'static str,
    pub invalid_credentials: &'static str,
    pub unknown_error: &'static str,
    pub generic_failure: &'static str,
    pub transport_failed: &'static str,
    pub storage_failed: &'static str,
    pub sign_in_succeeded: &'static str,
    pub sign_up_succeeded: &'static str,
    pub duplicate_account: &'static str,
}

const EN: Messages = Messages {
    missing_fields: "Username and password are required.",
    weak_password: "The password must be at least 8 characters long, contain a digit, an uppercase letter and a lowercase letter, and no spaces.",
    invalid_credentials: "Incorrect username or password.",
    unknown_error: "Unknown error.",
    generic_failure: "Something went wrong. Please try again.",
    transport_failed: "Unable to process your request. Please try again.",
    storage_failed: "Signed in, but the session could not be saved. Please try again.",
    sign_in_succeeded: "Signed in successfully!",
    sign_up_succeeded: "Account created successfully!",
    duplicate_account: "This user already exists. Please try signing in.",
};

const FR: Messages = Messages {
    missing_fields: "Le nom d'utilisateur et le mot de passe sont requis.",
    weak_password: "Le mot de passe doit contenir au moins 8 caractères, un chiffre, une majuscule, une minuscule, et ne pas contenir d'espaces.",
    invalid_credentials: "Nom d'utilisateur ou mot de passe incorrect.",
    unknown_error: "Erreur inconnue.",
    generic_failure: "Une erreur est survenue. Veuillez réessayer.",
    transport_failed: "Impossible de traiter votre demande. Réessayez.",
    storage_failed: "Connexion établie, mais la session n'a pas pu être enregistrée. Réessayez.",
    sign_in_succeeded: "Connexion réussie !",
    sign_up_succeeded: "Inscription réussie !",
    duplicate_account: "Cet utilisateur existe déjà. Veuillez essayer de vous connecter.",
};

impl Messages {
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => EN,
            Locale::Fr => FR,
        }
    }

    #[must_use]
    pub fn validation(&self, error: ValidationError) -> &'static str {
        match error {
            ValidationError::MissingFields => self.missing_fields,
            ValidationError::WeakPassword => self.weak_password,
        }
    }

    /// Acknowledgment shown after a successful submission in `mode`.
    #[must_use]
    pub fn success(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::SignIn => self.sign_in_succeeded,
            Mode::SignUp => self.sign_up_succeeded,
        }
    }

    /// Error message for the outcome, or `None` when the outcome is not shown
    /// as an error (success, duplicate-account recovery, dropped submission).
    #[must_use]
    pub fn error_for(&self, outcome: &Outcome) -> Option<String> {
        let message = match outcome {
            Outcome::Success(_) | Outcome::DuplicateAccount | Outcome::AlreadyPending => {
                return None;
            }
            Outcome::ValidationRejected(error) => self.validation(*error),
            Outcome::InvalidCredentials => self.invalid_credentials,
            Outcome::SignupRejected(Some(message)) => return Some(message.clone()),
            Outcome::SignupRejected(None) => self.unknown_error,
            Outcome::MalformedSuccess | Outcome::UnclassifiedFailure => self.generic_failure,
            Outcome::TransportFailed => self.transport_failed,
            Outcome::StorageFailed => self.storage_failed,
        };
        Some(message.to_string())
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
