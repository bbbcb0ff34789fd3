use crate::{
    APP_USER_AGENT,
    auth::{
        Collaborators, HttpTransport, Messages, Outcome, SubmissionController,
        token_store::FileTokenStore,
    },
    cli::{actions::Action, actions::host::TerminalHost, globals::GlobalArgs},
};
use anyhow::{Context, Result, anyhow, bail};
use secrecy::{ExposeSecret, SecretString};
use std::{io::Write, sync::Arc};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, instrument};

/// Handle the submit action
///
/// # Errors
/// Returns an error unless the submission ends in `Outcome::Success`.
#[instrument(skip(action, globals))]
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Submit {
        mode,
        username,
        password,
        email,
    } = action
    else {
        bail!("unexpected action for submit handler");
    };

    let password = match password {
        Some(password) => password,
        None => read_password().await?,
    };

    let host = Arc::new(TerminalHost::stdout());
    let tokens = Arc::new(FileTokenStore::new(&globals.token_store));
    let collaborators = Collaborators {
        session: host.clone(),
        tokens,
        navigator: host.clone(),
        popup: host.clone(),
        alerts: host.clone(),
    };

    let user_agent = format!("{APP_USER_AGENT} ({})", short_hash());
    let transport = HttpTransport::with_timeout(&user_agent, globals.timeout)?;
    let controller = SubmissionController::new(
        transport,
        globals.endpoints.clone(),
        Messages::for_locale(globals.locale),
        collaborators,
    );

    controller.with_form(|form| {
        if form.mode() != mode {
            form.switch_mode();
        }
        form.set_username(&username);
        form.set_password(password.expose_secret());
        if let Some(email) = &email {
            form.set_email(email);
        }
    });

    let outcome = controller.submit().await;
    debug!(outcome = outcome.label(), "submit finished");

    match outcome {
        Outcome::Success(_) => {
            debug!(path = %globals.token_store.display(), "session token saved");
            Ok(())
        }
        Outcome::DuplicateAccount => {
            host.println(&format!(
                "Run `namba-auth signin --username {username}` to continue."
            ));
            Err(anyhow!("account already exists"))
        }
        _ => Err(anyhow!(
            controller
                .error_message()
                .unwrap_or_else(|| format!("submission failed: {}", outcome.label()))
        )),
    }
}

async fn read_password() -> Result<SecretString> {
    eprint!("Password: ");
    std::io::stderr().flush()?;

    let line = BufReader::new(tokio::io::stdin())
        .lines()
        .next_line()
        .await
        .context("failed to read password from stdin")?
        .unwrap_or_default();

    Ok(SecretString::from(line))
}

fn short_hash() -> &'static str {
    let hash = crate::GIT_COMMIT_HASH;
    hash.get(..7).unwrap_or(hash)
}

