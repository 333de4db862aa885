use serde::Deserialize;

use super::client::DoClient;
use super::pagination::{Links, Page};
use crate::error::AppError;
use crate::models::FloatingIp;

#[derive(Deserialize)]
struct FloatingIpsResponse {
    #[serde(default)]
    floating_ips: Vec<FloatingIp>,
    #[serde(default)]
    links: Links,
}

#[derive(Deserialize)]
struct FloatingIpResponse {
    floating_ip: FloatingIp,
}

/// Load one page of floating IPs, assigned or not.
pub async fn list_floating_ips_page(client: &DoClient, page: u32) -> Result<Page<FloatingIp>, AppError> {
    let resp: FloatingIpsResponse = client.get("/v2/floating_ips", client.page_params(page)).await?;
    Ok(Page::new(resp.floating_ips, resp.links.next_page()))
}

/// Reserve a new floating IP in a region.
pub async fn create_floating_ip(client: &DoClient, region: &str) -> Result<FloatingIp, AppError> {
    let payload = serde_json::json!({ "region": region });
    let resp: FloatingIpResponse = client.post("/v2/floating_ips", payload).await?;
    Ok(resp.floating_ip)
}
