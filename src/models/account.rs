use serde::{Deserialize, Serialize};

pub const ACTIVE_ACCOUNT_STATUS: &str = "active";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Account {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub droplet_limit: u32,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_ACCOUNT_STATUS
    }
}
