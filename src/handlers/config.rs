use yansi::Paint;

use super::setup::init_config_file;
use super::table::configurations_table;
use crate::api::{check_account, CloudProvider};
use crate::catalog;
use crate::config::get_api_key_override;
use crate::error::AppError;
use crate::models::{Account, Configuration, DropletConfig};
use crate::prompt::Prompter;
use crate::store::ConfigStore;
use crate::wizard;

/// Credential for this run: `GUMDROP_APIKEY` when set, otherwise the stored one.
pub fn effective_api_key(config: &Configuration) -> Result<String, AppError> {
    let key = get_api_key_override().unwrap_or_else(|| config.api_key.trim().to_string());
    if key.is_empty() {
        return Err(AppError::Validation("No API key configured".into()));
    }
    Ok(key)
}

/// `config create`: run the wizard and merge its result into the store.
/// Returns `None` when the operator declined to create a missing config file.
pub async fn config_create<P, F, Q>(
    store: &ConfigStore,
    connect: F,
    prompter: &mut Q,
) -> Result<Option<DropletConfig>, AppError>
where
    P: CloudProvider,
    F: Fn(&str) -> Result<P, AppError>,
    Q: Prompter,
{
    if !store.exists() && init_config_file(store, &connect, prompter).await?.is_none() {
        return Ok(None);
    }
    let mut config = store.load()?;
    let provider = connect(&effective_api_key(&config)?)?;

    let droplet = wizard::run(&provider, prompter).await?;
    if config.upsert(droplet.clone()).is_some() {
        tracing::info!(name = %droplet.name, "replacing existing droplet configuration");
    }
    store.save(&config)?;
    println!("{} {}", Paint::new("Config file saved:").green(), store.path().display());
    Ok(Some(droplet))
}

/// `config list`: show stored configurations next to live droplet status.
pub async fn config_list<P, F>(store: &ConfigStore, connect: F) -> Result<(), AppError>
where
    P: CloudProvider,
    F: Fn(&str) -> Result<P, AppError>,
{
    let config = store.load()?;
    if config.droplets.is_empty() {
        println!("(no droplet configurations yet; run `gumdrop config create`)");
        return Ok(());
    }
    let provider = connect(&effective_api_key(&config)?)?;
    let live = catalog::droplets(&provider).await?;
    println!("\n{}\n", configurations_table(&config, &live));
    Ok(())
}

/// `check-config`: verify the credential belongs to an active account.
pub async fn check_config<P, F>(store: &ConfigStore, connect: F) -> Result<Account, AppError>
where
    P: CloudProvider,
    F: Fn(&str) -> Result<P, AppError>,
{
    let config = store.load()?;
    let provider = connect(&effective_api_key(&config)?)?;
    let account = check_account(&provider).await?;
    println!(
        "{} ({}, status: {})",
        Paint::new("Configuration looks valid").green(),
        account.email,
        account.status
    );
    Ok(account)
}
