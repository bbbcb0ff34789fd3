pub mod api;
pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_SIGN_IN: &str = "signin";
pub const CMD_SIGN_UP: &str = "signup";
pub const CMD_STATUS: &str = "status";

pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_EMAIL: &str = "email";

fn credential_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_USERNAME)
                .short('u')
                .long(ARG_USERNAME)
                .help("Account username")
                .env("NAMBA_USERNAME")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .short('p')
                .long(ARG_PASSWORD)
                .help("Account password; read from stdin when omitted")
                .env("NAMBA_PASSWORD")
                .hide_env_values(true),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("namba-auth")
        .about("Sign in or sign up to Namba")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(credential_args(
            Command::new(CMD_SIGN_IN).about("Sign in with an existing account"),
        ))
        .subcommand(
            credential_args(Command::new(CMD_SIGN_UP).about("Create a new account")).arg(
                Arg::new(ARG_EMAIL)
                    .short('e')
                    .long(ARG_EMAIL)
                    .help("Optional email address")
                    .env("NAMBA_EMAIL"),
            ),
        )
        .subcommand(Command::new(CMD_STATUS).about("Show whether a session token is stored"));

    let command = api::with_args(command);
    logging::with_args(command)
}
