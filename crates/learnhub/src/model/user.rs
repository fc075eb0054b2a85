use crate::views::search::SearchFields;
use remote_store::{Resource, ResourceKey};
use serde::{Deserialize, Serialize};

/// A platform account, managed from the admin back-office.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub organization_slug: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_slug: Option<String>,
}

impl Resource for User {
    type Create = UserCreate;
    type Update = UserUpdate;
    const NAME: &'static str = "user";
    const COLLECTION: &'static str = "admin/users";

    fn key(&self) -> ResourceKey {
        ResourceKey::id(self.id)
    }
}

impl SearchFields for User {
    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<&str> {
        match key {
            "role" => Some(self.role.as_str()),
            "organization" => self.organization_slug.as_deref(),
            _ => None,
        }
    }
}
