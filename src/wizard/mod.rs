//! Droplet configuration wizard
//!
//! Asks, in order: name, image, region, size (restricted to the chosen
//! region), floating IP and volumes. Each answer is final; an interrupt
//! abandons the whole run.

pub mod attach;

use crate::api::CloudProvider;
use crate::catalog::{self, Catalog};
use crate::error::AppError;
use crate::models::floating_ip::address_from_label;
use crate::models::{DropletConfig, Size};
use crate::prompt::Prompter;

pub use attach::{AttachState, ASSIGN_FLOATING_IP_PROMPT, ATTACH_VOLUME_PROMPT};

pub const NAME_PROMPT: &str = "Choose a unique name for this droplet";
pub const IMAGE_PROMPT: &str = "Choose the application image";
pub const REGION_PROMPT: &str = "Choose the region for the droplet";
pub const SIZE_PROMPT: &str = "Choose the droplet size";

/// Single-select over a catalog, returning the chosen descriptor.
fn choose<'a, T, Q: Prompter>(prompter: &mut Q, message: &str, catalog: &'a Catalog<T>) -> Result<&'a T, AppError> {
    if catalog.is_empty() {
        return Err(AppError::Validation(format!("Nothing to choose from: {}", message)));
    }
    let idx = prompter.select(message, catalog.labels(), 0)?;
    let label = attach::pick(catalog.labels(), idx)?;
    catalog
        .get(label)
        .ok_or_else(|| AppError::Validation(format!("Unknown selection: {}", label)))
}

/// Walk the operator through one droplet configuration.
pub async fn run<P, Q>(provider: &P, prompter: &mut Q) -> Result<DropletConfig, AppError>
where
    P: CloudProvider,
    Q: Prompter,
{
    let regions = catalog::regions(provider).await?;
    let images = catalog::images(provider).await?;
    let sizes = catalog::sizes(provider).await?;
    tracing::debug!(
        regions = regions.len(),
        images = images.len(),
        sizes = sizes.len(),
        "catalogs loaded"
    );

    let name = prompter.input_text(NAME_PROMPT)?.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Droplet name is required".into()));
    }
    let image = choose(prompter, IMAGE_PROMPT, &images)?;
    let region = choose(prompter, REGION_PROMPT, &regions)?;

    let eligible = catalog::eligible_sizes(&sizes, &region.slug)?;
    let size_labels: Vec<String> = eligible.iter().map(Size::label).collect();
    let idx = prompter.select(SIZE_PROMPT, &size_labels, 0)?;
    let size = eligible
        .get(idx)
        .ok_or_else(|| AppError::Validation(format!("Selection {} is out of range", idx)))?;

    let floating_ip = attach::assign_floating_ip(provider, prompter, &region.slug).await?;
    let volumes = attach::attach_volumes(provider, prompter, &region.slug).await?;

    Ok(DropletConfig {
        name,
        size: size.slug.clone(),
        image: image.reference(),
        region: region.slug.clone(),
        floating_ip: address_from_label(&floating_ip).to_string(),
        volumes,
    })
}
