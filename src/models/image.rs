use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub distribution: String,
    // Private snapshots and backups have no slug
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub regions: Vec<String>,
}

impl Image {
    /// Catalog label, e.g. `Ubuntu - 22.04 (LTS) x64`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.distribution, self.name)
    }

    /// Value stored in a droplet configuration: the slug, or the numeric id
    /// for images that have none.
    pub fn reference(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => self.id.to_string(),
        }
    }
}
