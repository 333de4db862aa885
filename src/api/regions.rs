use serde::Deserialize;

use super::client::DoClient;
use super::pagination::{Links, Page};
use crate::error::AppError;
use crate::models::Region;

#[derive(Deserialize)]
struct RegionsResponse {
    #[serde(default)]
    regions: Vec<Region>,
    #[serde(default)]
    links: Links,
}

/// Load one page of regions.
pub async fn list_regions_page(client: &DoClient, page: u32) -> Result<Page<Region>, AppError> {
    let resp: RegionsResponse = client.get("/v2/regions", client.page_params(page)).await?;
    Ok(Page::new(resp.regions, resp.links.next_page()))
}
