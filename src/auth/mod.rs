//! Sign-in / sign-up submission: form state, local validation, the request
//! lifecycle and the classification of what the server answered. Passwords and
//! session tokens pass through this module, so nothing here logs them.
//!
//! Flow Overview: the host mutates the [`form::FormState`] owned by a
//! [`controller::SubmissionController`]. On submit the controller takes the
//! pending flag, runs [`validator::validate`], POSTs the credentials to the
//! endpoint selected by [`form::Mode`], classifies the answer into an
//! [`outcome::Outcome`] and applies it: token persisted and host notified on
//! success, duplicate-account recovery into sign-in mode, or a localized error
//! message for everything else.

pub mod config;
pub mod controller;
pub mod form;
pub mod messages;
pub mod outcome;
pub mod session;
pub mod token_store;
pub mod transport;
pub mod types;
pub mod validator;

pub use config::Endpoints;
pub use controller::SubmissionController;
pub use form::{Credentials, FormState, Mode, SubmissionStatus};
pub use messages::{Locale, Messages};
pub use outcome::{Outcome, classify};
pub use session::{Alerts, Collaborators, Navigator, Popup, SessionStore, TokenStore};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
pub use validator::{ValidationError, validate};
