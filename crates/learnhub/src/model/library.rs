use crate::views::search::SearchFields;
use remote_store::{Resource, ResourceKey};
use serde::{Deserialize, Serialize};

/// A downloadable or linkable item in the learning library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LibraryItem {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub resource_url: String,
}

/// Payload for creating a library item. `thumbnail_url` comes from the media
/// upload side channel.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryItemCreate {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub resource_url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LibraryItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,
}

impl Resource for LibraryItem {
    type Create = LibraryItemCreate;
    type Update = LibraryItemUpdate;
    const NAME: &'static str = "library_item";
    const COLLECTION: &'static str = "admin/library";

    fn key(&self) -> ResourceKey {
        ResourceKey::with_slug(self.id, self.slug.clone())
    }
}

impl SearchFields for LibraryItem {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.category.as_deref());
        fields
    }

    fn filter_value(&self, key: &str) -> Option<&str> {
        match key {
            "category" => self.category.as_deref(),
            _ => None,
        }
    }
}
