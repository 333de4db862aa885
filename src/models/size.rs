use serde::{Deserialize, Serialize};

/// Separator every current size slug carries (`s-1vcpu-1gb`); legacy slugs
/// such as `512mb` do not.
pub const SIZE_SLUG_SEPARATOR: char = '-';

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Size {
    pub slug: String,
    #[serde(default)]
    pub price_monthly: f64,
    #[serde(default)]
    pub price_hourly: f64,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub vcpus: u32,
    #[serde(default)]
    pub disk: u64,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub regions: Vec<String>,
}

impl Size {
    /// Catalog label, e.g. `s-1vcpu-1gb - $6.00/month`.
    pub fn label(&self) -> String {
        format!("{} - ${:.2}/month", self.slug, self.price_monthly)
    }

    pub fn is_legacy(&self) -> bool {
        !self.slug.contains(SIZE_SLUG_SEPARATOR)
    }

    /// Exact membership check of a region slug in the size's region list.
    pub fn supports_region(&self, region_slug: &str) -> bool {
        self.regions.iter().any(|r| r == region_slug)
    }
}
