use crate::auth::{Endpoints, Locale};
use std::{path::PathBuf, time::Duration};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub token_store: PathBuf,
    pub locale: Locale,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            timeout: crate::auth::transport::DEFAULT_REQUEST_TIMEOUT,
            token_store: PathBuf::from(crate::cli::commands::api::DEFAULT_TOKEN_STORE),
            locale: Locale::default(),
        }
    }

    pub fn set_token_store(&mut self, path: impl Into<PathBuf>) {
        self.token_store = path.into();
    }
}
