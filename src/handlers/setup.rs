use std::path::Path;
use yansi::Paint;

use crate::api::{check_account, CloudProvider};
use crate::error::AppError;
use crate::models::Configuration;
use crate::prompt::Prompter;
use crate::store::ConfigStore;

pub const TOKEN_PROMPT: &str = "Enter your Digital Ocean Personal Access Token";

fn display_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Offer to create a missing config file. Asks for a credential until the
/// provider accepts it as an active account, then writes the file with
/// owner-only permissions. Returns `None` when the operator declines.
pub async fn init_config_file<P, F, Q>(
    store: &ConfigStore,
    connect: &F,
    prompter: &mut Q,
) -> Result<Option<Configuration>, AppError>
where
    P: CloudProvider,
    F: Fn(&str) -> Result<P, AppError>,
    Q: Prompter,
{
    println!(
        "{} {}",
        Paint::new("Configuration file not found:").yellow(),
        display_path(store.path())
    );
    let message = format!("Do you want to create a new config file ({})?", store.path().display());
    if !prompter.confirm(&message, false)? {
        return Ok(None);
    }

    let api_key = loop {
        println!("\nCreate your Digital Ocean Personal Access Token (See https://cloud.digitalocean.com/account/api/tokens)");
        let candidate = prompter.input_text(TOKEN_PROMPT)?.trim().to_string();
        if candidate.is_empty() {
            println!("{}", Paint::new("A token is required").red());
            continue;
        }
        let provider = connect(&candidate)?;
        match check_account(&provider).await {
            Ok(account) => {
                tracing::info!(email = %account.email, "credential accepted");
                break candidate;
            }
            // Rejected or inactive credentials are re-asked; transport failures are not.
            Err(e @ (AppError::Api { .. } | AppError::InactiveAccount(_))) => {
                println!("{}", Paint::new(e.to_string()).red());
            }
            Err(e) => return Err(e),
        }
    };

    let config = store.create(&api_key)?;
    println!(
        "\n{} {}",
        Paint::new("Created new config file:").green(),
        display_path(store.path())
    );
    Ok(Some(config))
}
