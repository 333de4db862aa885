use super::client::DoClient;
use super::pagination::Page;
use crate::error::AppError;
use crate::models::{Account, Droplet, FloatingIp, Image, Region, Size, Volume};

/// Everything the catalogs, the wizard and the CLI need from the cloud
/// provider. `DoClient` talks to the real API; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait CloudProvider {
    async fn get_account(&self) -> Result<Account, AppError>;
    async fn list_regions(&self, page: u32) -> Result<Page<Region>, AppError>;
    async fn list_images(&self, page: u32) -> Result<Page<Image>, AppError>;
    async fn list_sizes(&self, page: u32) -> Result<Page<Size>, AppError>;
    async fn list_floating_ips(&self, page: u32) -> Result<Page<FloatingIp>, AppError>;
    async fn list_volumes(&self, page: u32) -> Result<Page<Volume>, AppError>;
    async fn list_droplets(&self, page: u32) -> Result<Page<Droplet>, AppError>;
    async fn create_floating_ip(&self, region: &str) -> Result<FloatingIp, AppError>;
    async fn create_volume(&self, region: &str, name: &str, size_gib: u64) -> Result<Volume, AppError>;
}

impl CloudProvider for DoClient {
    async fn get_account(&self) -> Result<Account, AppError> {
        super::account::get_account(self).await
    }

    async fn list_regions(&self, page: u32) -> Result<Page<Region>, AppError> {
        super::regions::list_regions_page(self, page).await
    }

    async fn list_images(&self, page: u32) -> Result<Page<Image>, AppError> {
        super::images::list_images_page(self, page).await
    }

    async fn list_sizes(&self, page: u32) -> Result<Page<Size>, AppError> {
        super::sizes::list_sizes_page(self, page).await
    }

    async fn list_floating_ips(&self, page: u32) -> Result<Page<FloatingIp>, AppError> {
        super::floating_ips::list_floating_ips_page(self, page).await
    }

    async fn list_volumes(&self, page: u32) -> Result<Page<Volume>, AppError> {
        super::volumes::list_volumes_page(self, page).await
    }

    async fn list_droplets(&self, page: u32) -> Result<Page<Droplet>, AppError> {
        super::droplets::list_droplets_page(self, page).await
    }

    async fn create_floating_ip(&self, region: &str) -> Result<FloatingIp, AppError> {
        super::floating_ips::create_floating_ip(self, region).await
    }

    async fn create_volume(&self, region: &str, name: &str, size_gib: u64) -> Result<Volume, AppError> {
        super::volumes::create_volume(self, region, name, size_gib).await
    }
}
