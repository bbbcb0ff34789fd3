//! Classification of a submission attempt. Every path ends in an [`Outcome`];
//! nothing here is surfaced to the host as an error.

use super::{
    form::Mode,
    transport::{TransportError, TransportResponse},
    types::{DUPLICATE_ACCOUNT_ERROR, ErrorBody, TokenEnvelope},
    validator::ValidationError,
};
use reqwest::StatusCode;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub enum Outcome {
    /// The server issued a session token.
    Success(SecretString),
    /// Local validation failed; no request was sent.
    ValidationRejected(ValidationError),
    /// No response was received (refused, DNS, timeout).
    TransportFailed,
    /// A success status without a usable token.
    MalformedSuccess,
    InvalidCredentials,
    /// Sign-up refused because the username is taken.
    DuplicateAccount,
    /// Sign-up refused for another reason, with the server's message if any.
    SignupRejected(Option<String>),
    /// Any status the form has no specific handling for.
    UnclassifiedFailure,
    /// The token was issued but could not be persisted.
    StorageFailed,
    /// A submission was already in flight; this one was dropped.
    AlreadyPending,
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Short label for logs; never includes token material.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::ValidationRejected(_) => "validation_rejected",
            Self::TransportFailed => "transport_failed",
            Self::MalformedSuccess => "malformed_success",
            Self::InvalidCredentials => "invalid_credentials",
            Self::DuplicateAccount => "duplicate_account",
            Self::SignupRejected(_) => "signup_rejected",
            Self::UnclassifiedFailure => "unclassified_failure",
            Self::StorageFailed => "storage_failed",
            Self::AlreadyPending => "already_pending",
        }
    }
}

/// Maps what came back from the endpoint selected by `mode` to an outcome.
#[must_use]
pub fn classify(mode: Mode, result: Result<TransportResponse, TransportError>) -> Outcome {
    let Ok(response) = result else {
        return Outcome::TransportFailed;
    };

    if response.status.is_success() {
        let envelope: TokenEnvelope =
            serde_json::from_value(response.body).unwrap_or_default();
        return match envelope.token() {
            Some(token) => Outcome::Success(SecretString::from(token.to_string())),
            None => Outcome::MalformedSuccess,
        };
    }

    match response.status {
        StatusCode::UNAUTHORIZED => Outcome::InvalidCredentials,
        StatusCode::BAD_REQUEST if mode.is_sign_up() => {
            let body: ErrorBody = serde_json::from_value(response.body).unwrap_or_default();
            match body.error {
                Some(error) if error == DUPLICATE_ACCOUNT_ERROR => Outcome::DuplicateAccount,
                Some(error) if !error.is_empty() => Outcome::SignupRejected(Some(error)),
                _ => Outcome::SignupRejected(None),
            }
        }
        _ => Outcome::UnclassifiedFailure,
    }
}
