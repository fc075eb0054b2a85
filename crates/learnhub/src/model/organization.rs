use crate::views::search::SearchFields;
use remote_store::{Resource, ResourceKey};
use serde::{Deserialize, Serialize};

/// A customer organization holding seats on the platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Organization {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub seats: Option<u32>,
}

/// Payload for creating an organization. `logo_url` comes from the media upload
/// side channel.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationCreate {
    pub name: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
}

impl Resource for Organization {
    type Create = OrganizationCreate;
    type Update = OrganizationUpdate;
    const NAME: &'static str = "organization";
    const COLLECTION: &'static str = "admin/organizations";

    fn key(&self) -> ResourceKey {
        ResourceKey::with_slug(self.id, self.slug.clone())
    }
}

impl SearchFields for Organization {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.industry.as_deref());
        fields
    }

    fn filter_value(&self, key: &str) -> Option<&str> {
        match key {
            "industry" => self.industry.as_deref(),
            _ => None,
        }
    }
}
