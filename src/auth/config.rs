//! Endpoint configuration: where credentials are POSTed, where the host goes
//! after authenticating, and the key the token is stored under. Values are
//! public; do not store secrets here.

use super::form::Mode;
use anyhow::{Context, Result, anyhow};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3002";
pub const SIGN_IN_PATH: &str = "/api/user/login";
pub const SIGN_UP_PATH: &str = "/api/user/signup";
pub const POST_AUTH_ROUTE: &str = "/services";
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub api_base_url: String,
    pub sign_in_path: String,
    pub sign_up_path: String,
    pub post_auth_route: String,
    pub token_key: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            sign_in_path: SIGN_IN_PATH.to_string(),
            sign_up_path: SIGN_UP_PATH.to_string(),
            post_auth_route: POST_AUTH_ROUTE.to_string(),
            token_key: TOKEN_KEY.to_string(),
        }
    }
}

impl Endpoints {
    /// Default paths against `api_base_url`.
    ///
    /// # Errors
    /// Returns an error unless the base URL is an absolute http(s) URL.
    pub fn with_base_url(api_base_url: &str) -> Result<Self> {
        let trimmed = api_base_url.trim();
        let parsed =
            Url::parse(trimmed).with_context(|| format!("invalid API base URL: {trimmed}"))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => return Err(anyhow!("unsupported API URL scheme: {scheme}")),
        }

        if parsed.host().is_none() {
            return Err(anyhow!("API base URL has no host: {trimmed}"));
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
            ..Self::default()
        })
    }

    /// Full URL of the endpoint `mode` submits to.
    #[must_use]
    pub fn url_for(&self, mode: Mode) -> String {
        let path = match mode {
            Mode::SignIn => &self.sign_in_path,
            Mode::SignUp => &self.sign_up_path,
        };
        build_url_with_base(&self.api_base_url, path)
    }
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
