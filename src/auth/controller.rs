//! Single-flight submission controller.
//!
//! The controller owns the popup's [`FormState`] and a pending flag. `submit`
//! takes the flag on entry and a drop guard releases it on every exit path,
//! including a dropped future, so at most one request is outstanding per
//! controller no matter what the host UI does. The form lock is never held
//! across the network await; hosts keep editing fields while a request runs.

use super::{
    config::Endpoints,
    form::{Credentials, FormState, Mode, SubmissionStatus},
    messages::Messages,
    outcome::{Outcome, classify},
    session::Collaborators,
    transport::Transport,
    types::CredentialsPayload,
    validator::validate,
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, MutexGuard, PoisonError,
};
use tracing::{debug, error, info, instrument, warn};

pub struct SubmissionController<T> {
    transport: T,
    endpoints: Endpoints,
    messages: Messages,
    collaborators: Collaborators,
    form: Mutex<FormState>,
    pending: AtomicBool,
    settled: AtomicBool,
}

/// Clears the pending flag when dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<T: Transport> SubmissionController<T> {
    #[must_use]
    pub fn new(
        transport: T,
        endpoints: Endpoints,
        messages: Messages,
        collaborators: Collaborators,
    ) -> Self {
        Self {
            transport,
            endpoints,
            messages,
            collaborators,
            form: Mutex::new(FormState::new()),
            pending: AtomicBool::new(false),
            settled: AtomicBool::new(false),
        }
    }

    /// True while a request is in flight; hosts use it to disable submit.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        if self.is_pending() {
            SubmissionStatus::Pending
        } else if self.settled.load(Ordering::Acquire) {
            SubmissionStatus::Settled
        } else {
            SubmissionStatus::Idle
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.form().mode()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.form().error_message().map(str::to_string)
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Runs `f` against the form, e.g. to apply a keystroke.
    pub fn with_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut self.form())
    }

    pub fn switch_mode(&self) {
        self.form().switch_mode();
    }

    /// Submits the current form and applies the outcome.
    ///
    /// Returns `Outcome::AlreadyPending` without touching any state if another
    /// submission has not settled yet.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Outcome {
        let Some(_pending) = PendingGuard::acquire(&self.pending) else {
            warn!("submission already in flight, ignoring");
            return Outcome::AlreadyPending;
        };

        let (mode, credentials) = {
            let form = self.form();
            (form.mode(), form.credentials().clone())
        };

        let outcome = self.send(mode, &credentials).await;
        let outcome = self.settle(mode, outcome);
        self.settled.store(true, Ordering::Release);

        info!(%mode, outcome = outcome.label(), "submission settled");
        outcome
    }

    async fn send(&self, mode: Mode, credentials: &Credentials) -> Outcome {
        if let Err(err) = validate(mode, credentials) {
            debug!(%mode, "validation rejected: {}", err);
            return Outcome::ValidationRejected(err);
        }

        let email = Some(credentials.email.as_str())
            .filter(|email| mode.is_sign_up() && !email.is_empty());
        let payload = CredentialsPayload {
            username: &credentials.username,
            password: credentials.password.expose_secret(),
            email,
        };
        let body = match serde_json::to_value(&payload) {
            Ok(body) => body,
            Err(err) => {
                error!("failed to encode credentials: {}", err);
                return Outcome::TransportFailed;
            }
        };

        let url = self.endpoints.url_for(mode);
        debug!(%mode, %url, "submitting credentials");

        let result = self.transport.post_json(&url, &body).await;
        if let Err(err) = &result {
            warn!(%url, "no response: {}", err);
        }

        classify(mode, result)
    }

    /// Applies the outcome to the form and the host collaborators.
    fn settle(&self, mode: Mode, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Success(token) => self.on_success(mode, token),
            Outcome::DuplicateAccount => {
                self.collaborators
                    .alerts
                    .alert(self.messages.duplicate_account);
                let mut form = self.form();
                if form.mode().is_sign_up() {
                    form.switch_mode();
                } else {
                    form.reset_fields();
                    form.clear_error();
                }
                Outcome::DuplicateAccount
            }
            outcome => {
                if let Some(message) = self.messages.error_for(&outcome) {
                    self.set_error_for(mode, message);
                }
                outcome
            }
        }
    }

    /// Sets `message` unless the form has switched away from `mode` while the
    /// request was in flight; a switch always leaves a clean form.
    fn set_error_for(&self, mode: Mode, message: String) {
        let mut form = self.form();
        if form.mode() == mode {
            form.set_error(message);
        } else {
            debug!(
                %mode,
                current = %form.mode(),
                "mode switched mid-flight, dropping error"
            );
        }
    }

    fn on_success(&self, mode: Mode, token: SecretString) -> Outcome {
        let Collaborators {
            session,
            tokens,
            navigator,
            popup,
            alerts,
        } = &self.collaborators;

        if let Err(err) = tokens.put(&self.endpoints.token_key, &token) {
            error!("failed to persist session token: {:#}", err);
            let outcome = Outcome::StorageFailed;
            if let Some(message) = self.messages.error_for(&outcome) {
                self.set_error_for(mode, message);
            }
            return outcome;
        }

        self.form().clear_error();
        session.login();
        alerts.alert(self.messages.success(mode));
        popup.close();
        navigator.go_to(&self.endpoints.post_auth_route);

        Outcome::Success(token)
    }

    fn form(&self) -> MutexGuard<'_, FormState> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
