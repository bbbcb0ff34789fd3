pub mod host;
pub mod status;
pub mod submit;

use crate::auth::Mode;
use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Submit {
        mode: Mode,
        username: String,
        /// `None` means prompt on stdin.
        password: Option<SecretString>,
        email: Option<String>,
    },
    Status,
}
