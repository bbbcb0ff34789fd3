//! Request and response bodies for the sign-in and sign-up endpoints. The
//! request carries the plain password, so these values must never be logged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error string the sign-up endpoint returns with a 400 when the username is
/// taken. Matching on text is brittle; keep this in sync with the server.
pub const DUPLICATE_ACCOUNT_ERROR: &str = "User already exists";

/// Body POSTed to both endpoints. `email` is left out entirely when absent.
#[derive(Serialize)]
pub struct CredentialsPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

/// Expected success body: `{"data": {"token": "..."}}`.
#[derive(Debug, Default, Deserialize)]
pub struct TokenEnvelope {
    #[serde(default)]
    pub data: Option<TokenData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenData {
    #[serde(default)]
    pub token: Option<Value>,
}

impl TokenEnvelope {
    /// Returns the token when it is a non-empty string.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.token.as_ref())
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }
}

/// Error body returned by the sign-up endpoint on a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
