//! Host-side collaborators the controller drives after a submission settles.
//! Each trait is a single capability so hosts (and tests) can supply just
//! what they have. The controller only writes to these; it never reads back
//! mid-submission.

use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

/// Process-wide "a user is logged in" notification.
pub trait SessionStore: Send + Sync {
    fn login(&self);
}

/// Persistent key-value store for the session token.
pub trait TokenStore: Send + Sync {
    /// Stores `token` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the value could not be persisted.
    fn put(&self, key: &str, token: &SecretString) -> Result<()>;
}

pub trait Navigator: Send + Sync {
    fn go_to(&self, route: &str);
}

pub trait Popup: Send + Sync {
    fn close(&self);
}

/// Surfaces a one-off acknowledgment to the user.
pub trait Alerts: Send + Sync {
    fn alert(&self, message: &str);
}

#[derive(Clone)]
pub struct Collaborators {
    pub session: Arc<dyn SessionStore>,
    pub tokens: Arc<dyn TokenStore>,
    pub navigator: Arc<dyn Navigator>,
    pub popup: Arc<dyn Popup>,
    pub alerts: Arc<dyn Alerts>,
}

/// In-memory logged-in flag.
#[derive(Debug, Default)]
pub struct SessionFlag {
    logged_in: AtomicBool,
}

impl SessionFlag {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }
}

impl SessionStore for SessionFlag {
    fn login(&self) {
        self.logged_in.store(true, Ordering::SeqCst);
    }
}

/// Token store that keeps values for the life of the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    values: Mutex<HashMap<String, SecretString>>,
}

impl MemoryTokenStore {
    /// Returns the stored token, exposed, for hosts that need to attach it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()?
            .get(key)
            .map(|token| token.expose_secret().to_string())
    }
}

impl TokenStore for MemoryTokenStore {
    fn put(&self, key: &str, token: &SecretString) -> Result<()> {
        self.values
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?
            .insert(key.to_string(), token.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryTokenStore, SessionFlag, SessionStore, TokenStore};
    use secrecy::SecretString;

    #[test]
    fn session_flag_flips_on_login() {
        let flag = SessionFlag::default();
        assert!(!flag.is_logged_in());
        flag.login();
        assert!(flag.is_logged_in());
    }

    #[test]
    fn memory_store_overwrites_previous_value() -> anyhow::Result<()> {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get("token"), None);
        store.put("token", &SecretString::from("first".to_string()))?;
        store.put("token", &SecretString::from("second".to_string()))?;
        assert_eq!(store.get("token").as_deref(), Some("second"));
        Ok(())
    }
}
