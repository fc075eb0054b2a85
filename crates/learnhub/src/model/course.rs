use crate::views::search::SearchFields;
use remote_store::{Resource, ResourceKey};
use serde::{Deserialize, Serialize};

/// A course as returned by the back-office API.
///
/// The `slug` is server-assigned on creation and never changes from the client's
/// perspective; it doubles as the public identifier in course URLs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// Payload for creating a course. `image_url` comes from the media upload side
/// channel, resolved before this payload is submitted.
#[derive(Debug, Clone, Serialize)]
pub struct CourseCreate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for updating a course; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl Resource for Course {
    type Create = CourseCreate;
    type Update = CourseUpdate;
    const NAME: &'static str = "course";
    const COLLECTION: &'static str = "admin/courses";

    fn key(&self) -> ResourceKey {
        ResourceKey::with_slug(self.id, self.slug.clone())
    }
}

impl SearchFields for Course {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.category.as_deref());
        fields
    }

    fn filter_value(&self, key: &str) -> Option<&str> {
        match key {
            "category" => self.category.as_deref(),
            "level" => self.level.as_deref(),
            _ => None,
        }
    }
}
