use serde::{Deserialize, Serialize};

use super::region::RegionRef;

/// A droplet that currently exists at the provider.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub region: RegionRef,
}
