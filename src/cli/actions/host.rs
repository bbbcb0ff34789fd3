//! Terminal implementations of the popup's host collaborators. Alerts and the
//! post-auth route go to stdout; login and close are recorded so the action
//! can report what happened.

use crate::auth::session::{Alerts, Navigator, Popup, SessionFlag, SessionStore};
use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};
use tracing::{debug, info};

pub struct TerminalHost<W: Write + Send> {
    out: Mutex<W>,
    session: SessionFlag,
    closed: AtomicBool,
    route: Mutex<Option<String>>,
}

impl TerminalHost<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            session: SessionFlag::default(),
            closed: AtomicBool::new(false),
            route: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn route(&self) -> Option<String> {
        self.route.lock().ok().and_then(|route| route.clone())
    }

    pub fn println(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            // stdout going away is not worth failing the submission over
            let _ = writeln!(out, "{line}");
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }
}

impl<W: Write + Send> SessionStore for TerminalHost<W> {
    fn login(&self) {
        info!("session started");
        self.session.login();
    }
}

impl<W: Write + Send> Navigator for TerminalHost<W> {
    fn go_to(&self, route: &str) {
        debug!(route, "navigating");
        if let Ok(mut current) = self.route.lock() {
            *current = Some(route.to_string());
        }
        self.println(&format!("Continue at {route}"));
    }
}

impl<W: Write + Send> Popup for TerminalHost<W> {
    fn close(&self) {
        debug!("popup closed");
        self.closed.store(true, Ordering::SeqCst);
    }
}

impl<W: Write + Send> Alerts for TerminalHost<W> {
    fn alert(&self, message: &str) {
        self.println(message);
    }
}
