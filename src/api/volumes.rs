use serde::Deserialize;

use super::client::DoClient;
use super::pagination::{Links, Page};
use crate::error::AppError;
use crate::models::Volume;

#[derive(Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    volumes: Vec<Volume>,
    #[serde(default)]
    links: Links,
}

#[derive(Deserialize)]
struct VolumeResponse {
    volume: Volume,
}

pub async fn list_volumes_page(client: &DoClient, page: u32) -> Result<Page<Volume>, AppError> {
    let resp: VolumesResponse = client.get("/v2/volumes", client.page_params(page)).await?;
    Ok(Page::new(resp.volumes, resp.links.next_page()))
}

/// Create a block-storage volume of `size_gib` GiB.
pub async fn create_volume(client: &DoClient, region: &str, name: &str, size_gib: u64) -> Result<Volume, AppError> {
    let payload = serde_json::json!({
        "region": region,
        "name": name,
        "size_gigabytes": size_gib,
    });
    let resp: VolumeResponse = client.post("/v2/volumes", payload).await?;
    Ok(resp.volume)
}
