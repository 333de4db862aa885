use serde::{Deserialize, Serialize};

use super::region::RegionRef;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Volume {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub region: RegionRef,
    #[serde(default)]
    pub size_gigabytes: u64,
    #[serde(default)]
    pub droplet_ids: Vec<u64>,
}

impl Volume {
    /// Catalog label, e.g. `data-01 - nyc1`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.region.slug)
    }

    pub fn is_attached(&self) -> bool {
        !self.droplet_ids.is_empty()
    }
}
