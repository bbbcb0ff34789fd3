use crate::{
    auth::token_store::FileTokenStore,
    cli::{actions::Action, globals::GlobalArgs},
};
use anyhow::{Result, bail};

/// Handle the status action
///
/// # Errors
/// Returns an error if the token store exists but cannot be read.
pub fn handle(action: &Action, globals: &GlobalArgs) -> Result<()> {
    let Action::Status = action else {
        bail!("unexpected action for status handler");
    };

    println!("{}", describe(globals)?);
    Ok(())
}

fn describe(globals: &GlobalArgs) -> Result<String> {
    let store = FileTokenStore::new(&globals.token_store);
    let line = match store.get(&globals.endpoints.token_key)? {
        Some(_) => format!("Signed in (session token in {})", store.path().display()),
        None => "Not signed in".to_string(),
    };
    Ok(line)
}
