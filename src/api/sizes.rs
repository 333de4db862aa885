use serde::Deserialize;

use super::client::DoClient;
use super::pagination::{Links, Page};
use crate::error::AppError;
use crate::models::Size;

#[derive(Deserialize)]
struct SizesResponse {
    #[serde(default)]
    sizes: Vec<Size>,
    #[serde(default)]
    links: Links,
}

pub async fn list_sizes_page(client: &DoClient, page: u32) -> Result<Page<Size>, AppError> {
    let resp: SizesResponse = client.get("/v2/sizes", client.page_params(page)).await?;
    Ok(Page::new(resp.sizes, resp.links.next_page()))
}
