use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Region {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Region {
    /// Catalog label, e.g. `New York 1 - nyc1`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.slug)
    }
}

/// Region reference embedded in floating IPs, volumes and droplets.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RegionRef {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
}
