//! Maps validated CLI matches to an action plus the shared settings.

use crate::{
    auth::{Endpoints, Locale, Mode},
    cli::{
        actions::Action,
        commands::{
            ARG_EMAIL, ARG_PASSWORD, ARG_USERNAME, CMD_SIGN_IN, CMD_SIGN_UP, CMD_STATUS,
            api::{ARG_API_URL, ARG_LANG, ARG_TIMEOUT, ARG_TOKEN_STORE},
        },
        globals::GlobalArgs,
    },
};
use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;
use std::time::Duration;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let (name, sub) = matches
        .subcommand()
        .context("missing subcommand: signin, signup or status")?;

    let globals = globals(sub)?;

    let action = match name {
        CMD_SIGN_IN => submit(Mode::SignIn, sub)?,
        CMD_SIGN_UP => submit(Mode::SignUp, sub)?,
        CMD_STATUS => Action::Status,
        other => return Err(anyhow!("unknown subcommand: {other}")),
    };

    Ok((action, globals))
}

fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>(ARG_API_URL)
        .context("missing required argument: --api-url")?;
    let mut globals = GlobalArgs::new(Endpoints::with_base_url(api_url)?);

    if let Some(seconds) = matches.get_one::<u64>(ARG_TIMEOUT) {
        globals.timeout = Duration::from_secs(*seconds);
    }
    if let Some(path) = matches.get_one::<String>(ARG_TOKEN_STORE) {
        globals.set_token_store(path);
    }
    if let Some(lang) = matches.get_one::<String>(ARG_LANG) {
        globals.locale = lang.parse::<Locale>().map_err(|e| anyhow!(e))?;
    }

    Ok(globals)
}

fn submit(mode: Mode, matches: &clap::ArgMatches) -> Result<Action> {
    let username = matches
        .get_one::<String>(ARG_USERNAME)
        .cloned()
        .context("missing required argument: --username")?;
    let password = matches
        .get_one::<String>(ARG_PASSWORD)
        .map(|password| SecretString::from(password.clone()));
    let email = if mode.is_sign_up() {
        matches.get_one::<String>(ARG_EMAIL).cloned()
    } else {
        None
    };

    Ok(Action::Submit {
        mode,
        username,
        password,
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::handler;
    use crate::auth::{Locale, Mode};
    use crate::cli::{actions::Action, commands};
    use secrecy::ExposeSecret;
    use std::{path::PathBuf, time::Duration};

    #[test]
    fn signup_maps_to_submit_action() {
        temp_env::with_vars(
            [
                ("NAMBA_API_URL", None::<&str>),
                ("NAMBA_LANG", None),
                ("NAMBA_TIMEOUT", None),
                ("NAMBA_TOKEN_STORE", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "namba-auth",
                    "signup",
                    "-u",
                    "bob",
                    "-p",
                    "Secret123",
                    "-e",
                    "bob@example.com",
                    "--lang",
                    "fr",
                    "--timeout",
                    "3",
                    "--token-store",
                    "/tmp/namba.json",
                ]);

                let (action, globals) = handler(&matches).unwrap();

                match action {
                    Action::Submit {
                        mode,
                        username,
                        password,
                        email,
                    } => {
                        assert_eq!(mode, Mode::SignUp);
                        assert_eq!(username, "bob");
                        assert_eq!(
                            password.map(|p| p.expose_secret().to_string()).as_deref(),
                            Some("Secret123")
                        );
                        assert_eq!(email.as_deref(), Some("bob@example.com"));
                    }
                    Action::Status => panic!("expected submit action"),
                }
                assert_eq!(globals.locale, Locale::Fr);
                assert_eq!(globals.timeout, Duration::from_secs(3));
                assert_eq!(globals.token_store, PathBuf::from("/tmp/namba.json"));
            },
        );
    }

    #[test]
    fn signin_without_password_defers_to_prompt() {
        temp_env::with_vars([("NAMBA_PASSWORD", None::<&str>)], || {
            let matches =
                commands::new().get_matches_from(vec!["namba-auth", "signin", "-u", "alice"]);
            let (action, _) = handler(&matches).unwrap();
            assert!(matches!(
                action,
                Action::Submit {
                    mode: Mode::SignIn,
                    password: None,
                    email: None,
                    ..
                }
            ));
        });
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let matches = commands::new().get_matches_from(vec![
            "namba-auth",
            "status",
            "--api-url",
            "ftp://namba.dev",
        ]);
        assert!(handler(&matches).is_err());
    }
}
