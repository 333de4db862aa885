use serde::Deserialize;

use super::client::DoClient;
use super::provider::CloudProvider;
use crate::error::AppError;
use crate::models::Account;

#[derive(Deserialize)]
struct AccountResponse {
    account: Account,
}

/// Fetch the account behind the client's credential.
pub async fn get_account(client: &DoClient) -> Result<Account, AppError> {
    let resp: AccountResponse = client.get("/v2/account", Vec::new()).await?;
    Ok(resp.account)
}

/// Fetch the account and require it to be active.
pub async fn check_account<P: CloudProvider>(provider: &P) -> Result<Account, AppError> {
    let account = provider.get_account().await?;
    if !account.is_active() {
        return Err(AppError::InactiveAccount(account.status));
    }
    Ok(account)
}
