use clap::{Arg, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_TOKEN_STORE: &str = "token-store";
pub const ARG_LANG: &str = "lang";

pub const DEFAULT_TOKEN_STORE: &str = ".namba/session.json";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the Namba API")
                .env("NAMBA_API_URL")
                .default_value(crate::auth::config::DEFAULT_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("NAMBA_TIMEOUT")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..=300))
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN_STORE)
                .long(ARG_TOKEN_STORE)
                .help("File the session token is stored in")
                .env("NAMBA_TOKEN_STORE")
                .default_value(DEFAULT_TOKEN_STORE)
                .global(true),
        )
        .arg(
            Arg::new(ARG_LANG)
                .long(ARG_LANG)
                .help("Language for user-facing messages: en, fr")
                .env("NAMBA_LANG")
                .default_value("en")
                .value_parser(["en", "fr"])
                .global(true),
        )
}
