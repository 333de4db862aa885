use serde::Deserialize;

use super::client::DoClient;
use super::pagination::{Links, Page};
use crate::error::AppError;
use crate::models::Image;

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    images: Vec<Image>,
    #[serde(default)]
    links: Links,
}

/// Load one page of images (public distributions, applications and the
/// account's own snapshots).
pub async fn list_images_page(client: &DoClient, page: u32) -> Result<Page<Image>, AppError> {
    let resp: ImagesResponse = client.get("/v2/images", client.page_params(page)).await?;
    Ok(Page::new(resp.images, resp.links.next_page()))
}
