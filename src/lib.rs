//! Credential submission for the Namba sign-in / sign-up popup.
//!
//! The [`auth`] module holds the form state, the local validation rules, the
//! outcome classification and the single-flight submission controller. The
//! [`cli`] module is a terminal host that drives the same controller.

pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
