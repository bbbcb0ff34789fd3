use anyhow::Result;
use namba_auth::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Submit { .. } => actions::submit::handle(action, &globals).await?,
        Action::Status => actions::status::handle(&action, &globals)?,
    }

    Ok(())
}
