use serde::{Deserialize, Serialize};

use super::region::RegionRef;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FloatingIp {
    pub ip: String,
    #[serde(default)]
    pub region: RegionRef,
    /// Droplet the address is assigned to; `null` when unassigned.
    #[serde(default)]
    pub droplet: Option<serde_json::Value>,
}

impl FloatingIp {
    /// Catalog label, e.g. `203.0.113.7 - nyc1`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.ip, self.region.slug)
    }

    pub fn is_assigned(&self) -> bool {
        matches!(&self.droplet, Some(v) if !v.is_null())
    }
}

/// Recover the bare address from a floating IP catalog label.
pub fn address_from_label(label: &str) -> &str {
    label.split(' ').next().unwrap_or_default()
}
