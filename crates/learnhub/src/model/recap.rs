use chrono::{DateTime, Utc};
use remote_store::{Resource, ResourceKey};
use serde::{Deserialize, Serialize};

/// Post-session recap material attached to a cohort: session recording plus notes.
/// Recaps are fetched scoped to a cohort via the `cohort` filter parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecapMaterial {
    pub id: u64,
    pub cohort_slug: String,
    pub title: String,
    pub session_date: DateTime<Utc>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecapMaterialCreate {
    pub cohort_slug: String,
    pub title: String,
    pub session_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RecapMaterialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Resource for RecapMaterial {
    type Create = RecapMaterialCreate;
    type Update = RecapMaterialUpdate;
    const NAME: &'static str = "recap_material";
    const COLLECTION: &'static str = "admin/recap-materials";

    fn key(&self) -> ResourceKey {
        ResourceKey::id(self.id)
    }
}
