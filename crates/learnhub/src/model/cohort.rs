use crate::views::search::SearchFields;
use chrono::{DateTime, Utc};
use remote_store::{Resource, ResourceKey};
use serde::{Deserialize, Serialize};

/// A scheduled run of a course. The stored `status` is what the server persists;
/// what list and detail pages display is derived from it plus the date range, see
/// [`crate::views::status`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cohort {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub course_slug: String,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CohortCreate {
    pub name: String,
    pub course_slug: String,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CohortUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl Resource for Cohort {
    type Create = CohortCreate;
    type Update = CohortUpdate;
    const NAME: &'static str = "cohort";
    const COLLECTION: &'static str = "admin/cohorts";

    fn key(&self) -> ResourceKey {
        ResourceKey::with_slug(self.id, self.slug.clone())
    }
}

impl SearchFields for Cohort {
    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.course_slug.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "course" => Some(self.course_slug.as_str()),
            _ => None,
        }
    }
}
