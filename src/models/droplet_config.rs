use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named, reusable droplet launch specification.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DropletConfig {
    pub name: String,
    pub size: String,
    pub image: String,
    pub region: String,
    #[serde(default, rename = "floatingip")]
    pub floating_ip: String,
    #[serde(default)]
    pub volumes: Vec<String>,
}

/// Everything persisted in the config file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Configuration {
    #[serde(default, rename = "apikey")]
    pub api_key: String,
    #[serde(default)]
    pub droplets: BTreeMap<String, DropletConfig>,
}

impl Configuration {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            droplets: BTreeMap::new(),
        }
    }

    /// Insert a droplet configuration, replacing any entry with the same name.
    pub fn upsert(&mut self, droplet: DropletConfig) -> Option<DropletConfig> {
        self.droplets.insert(droplet.name.clone(), droplet)
    }

    /// Configuration names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.droplets.keys().map(String::as_str).collect()
    }
}
