use serde::Deserialize;

use super::client::DoClient;
use super::pagination::{Links, Page};
use crate::error::AppError;
use crate::models::Droplet;

#[derive(Deserialize)]
struct DropletsResponse {
    #[serde(default)]
    droplets: Vec<Droplet>,
    #[serde(default)]
    links: Links,
}

/// Load one page of the account's running droplets.
pub async fn list_droplets_page(client: &DoClient, page: u32) -> Result<Page<Droplet>, AppError> {
    let resp: DropletsResponse = client.get("/v2/droplets", client.page_params(page)).await?;
    Ok(Page::new(resp.droplets, resp.links.next_page()))
}
