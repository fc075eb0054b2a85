use crate::views::search::SearchFields;
use remote_store::{Resource, ResourceKey};
use serde::{Deserialize, Serialize};

/// A member of a customer organization. Members have no slug of their own; lookups
/// go by numeric id, and list fetches are scoped with an `organization` filter
/// parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationMember {
    pub id: u64,
    pub organization_slug: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationMemberCreate {
    pub organization_slug: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationMemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Resource for OrganizationMember {
    type Create = OrganizationMemberCreate;
    type Update = OrganizationMemberUpdate;
    const NAME: &'static str = "member";
    const COLLECTION: &'static str = "admin/organization-members";

    fn key(&self) -> ResourceKey {
        ResourceKey::id(self.id)
    }
}

impl SearchFields for OrganizationMember {
    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<&str> {
        match key {
            "role" => Some(self.role.as_str()),
            "status" => Some(self.status.as_str()),
            "organization" => Some(self.organization_slug.as_str()),
            _ => None,
        }
    }
}
