//! Resource catalogs built from the provider's paged listings
//!
//! Every catalog is produced by [`collect`]: walk the listing from the first
//! page until the provider stops handing out a next-page cursor, fold each
//! descriptor into a map keyed by its display label, and expose the labels
//! in ascending order. Two descriptors with the same label collapse into one
//! entry; the one fetched last wins.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use crate::api::{CloudProvider, Page, FIRST_PAGE};
use crate::error::AppError;
use crate::models::{Droplet, FloatingIp, Image, Region, Size, Volume};

/// Deduplicated, label-sorted projection of a paged listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog<T> {
    labels: Vec<String>,
    entries: BTreeMap<String, T>,
}

impl<T> Catalog<T> {
    pub fn from_entries(entries: BTreeMap<String, T>) -> Self {
        let labels = entries.keys().cloned().collect();
        Self { labels, entries }
    }

    /// Labels in ascending order; always the exact key set of the catalog.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, label: &str) -> Option<&T> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.entries.iter()
    }
}

/// Walk a paged listing to completion.
///
/// `fetch` is called with the current page cursor; `label` derives the
/// catalog key of a descriptor and `keep` decides whether it enters the
/// catalog at all. The first failed fetch aborts the walk.
pub async fn collect<T, F, Fut, L, K>(mut fetch: F, label: L, keep: K) -> Result<Catalog<T>, AppError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, AppError>>,
    L: Fn(&T) -> String,
    K: Fn(&T) -> bool,
{
    let mut entries = BTreeMap::new();
    let mut page = FIRST_PAGE;
    loop {
        let batch = fetch(page).await?;
        tracing::debug!(page, items = batch.items.len(), next = ?batch.next_page, "fetched catalog page");
        for item in batch.items {
            if keep(&item) {
                entries.insert(label(&item), item);
            }
        }
        match batch.next_page {
            Some(next) => page = next,
            None => break,
        }
    }
    Ok(Catalog::from_entries(entries))
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

async fn with_spinner<T, Fut>(message: &str, fut: Fut) -> Result<T, AppError>
where
    Fut: Future<Output = Result<T, AppError>>,
{
    let pb = spinner(message);
    let result = fut.await;
    pb.finish_and_clear();
    result
}

pub async fn regions<P: CloudProvider>(provider: &P) -> Result<Catalog<Region>, AppError> {
    with_spinner(
        "Getting regions ...",
        collect(|page| provider.list_regions(page), Region::label, |_| true),
    )
    .await
}

pub async fn images<P: CloudProvider>(provider: &P) -> Result<Catalog<Image>, AppError> {
    with_spinner(
        "Getting images ...",
        collect(|page| provider.list_images(page), Image::label, |_| true),
    )
    .await
}

pub async fn sizes<P: CloudProvider>(provider: &P) -> Result<Catalog<Size>, AppError> {
    with_spinner(
        "Getting droplet sizes ...",
        collect(|page| provider.list_sizes(page), Size::label, |_| true),
    )
    .await
}

/// Floating IPs in `region_slug` that are not assigned to any droplet.
pub async fn unassigned_floating_ips<P: CloudProvider>(
    provider: &P,
    region_slug: &str,
) -> Result<Catalog<FloatingIp>, AppError> {
    with_spinner(
        "Getting existing Floating IP addresses ...",
        collect(
            |page| provider.list_floating_ips(page),
            FloatingIp::label,
            |ip| ip.region.slug == region_slug && !ip.is_assigned(),
        ),
    )
    .await
}

/// Volumes in `region_slug` that are not attached to any droplet.
pub async fn unattached_volumes<P: CloudProvider>(
    provider: &P,
    region_slug: &str,
) -> Result<Catalog<Volume>, AppError> {
    with_spinner(
        "Getting existing volumes ...",
        collect(
            |page| provider.list_volumes(page),
            Volume::label,
            |v| v.region.slug == region_slug && !v.is_attached(),
        ),
    )
    .await
}

/// Live droplets keyed by name.
pub async fn droplets<P: CloudProvider>(provider: &P) -> Result<Catalog<Droplet>, AppError> {
    with_spinner(
        "Getting droplets ...",
        collect(|page| provider.list_droplets(page), |d: &Droplet| d.name.clone(), |_| true),
    )
    .await
}

/// Sizes a droplet in `region_slug` can use, cheapest first.
///
/// Legacy slugs and unavailable sizes are dropped. An empty result is fatal:
/// every region is expected to offer at least one size.
pub fn eligible_sizes(sizes: &Catalog<Size>, region_slug: &str) -> Result<Vec<Size>, AppError> {
    let mut eligible: Vec<Size> = sizes
        .values()
        .filter(|s| !s.is_legacy() && s.available && s.supports_region(region_slug))
        .cloned()
        .collect();
    if eligible.is_empty() {
        return Err(AppError::Validation(format!(
            "Droplet sizes list is empty for region {}",
            region_slug
        )));
    }
    eligible.sort_by(|a, b| a.price_monthly.total_cmp(&b.price_monthly));
    Ok(eligible)
}
