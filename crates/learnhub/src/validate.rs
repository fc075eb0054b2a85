//! Synchronous, field-level payload validation.
//!
//! Validation failures are resolved locally: the store operation is simply not
//! invoked, so these errors never reach a store's `error` field. Callers run the
//! payload-specific check first and only submit on `Ok`.

use crate::model::{
    CohortCreate, CourseCreate, LibraryItemCreate, OrganizationCreate, OrganizationMemberCreate,
    RecapMaterialCreate, UserCreate,
};
use chrono::{DateTime, Utc};

/// One failed check, addressed to the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                field,
                message: "is required".to_string(),
            });
        }
    }

    fn email(&mut self, field: &'static str, value: &str) {
        let trimmed = value.trim();
        let well_formed = trimmed
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !well_formed {
            self.errors.push(FieldError {
                field,
                message: "must be a valid email address".to_string(),
            });
        }
    }

    fn non_negative(&mut self, field: &'static str, value: f64) {
        if value < 0.0 {
            self.errors.push(FieldError {
                field,
                message: "must not be negative".to_string(),
            });
        }
    }

    fn ordered(&mut self, field: &'static str, start: DateTime<Utc>, end: DateTime<Utc>) {
        if start >= end {
            self.errors.push(FieldError {
                field,
                message: "must be after the start date".to_string(),
            });
        }
    }

    fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn course_create(payload: &CourseCreate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    checks.require("title", &payload.title);
    checks.require("description", &payload.description);
    checks.require("category", &payload.category);
    checks.require("level", &payload.level);
    checks.non_negative("price", payload.price);
    checks.finish()
}

pub fn cohort_create(payload: &CohortCreate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    checks.require("name", &payload.name);
    checks.require("course_slug", &payload.course_slug);
    checks.ordered("end_date", payload.start_date, payload.end_date);
    checks.finish()
}

pub fn organization_create(payload: &OrganizationCreate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    checks.require("name", &payload.name);
    checks.require("industry", &payload.industry);
    checks.finish()
}

pub fn member_create(payload: &OrganizationMemberCreate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    checks.require("name", &payload.name);
    checks.require("organization_slug", &payload.organization_slug);
    checks.require("role", &payload.role);
    checks.email("email", &payload.email);
    checks.finish()
}

pub fn library_item_create(payload: &LibraryItemCreate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    checks.require("title", &payload.title);
    checks.require("description", &payload.description);
    checks.require("category", &payload.category);
    checks.require("resource_url", &payload.resource_url);
    checks.finish()
}

pub fn recap_material_create(payload: &RecapMaterialCreate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    checks.require("title", &payload.title);
    checks.require("cohort_slug", &payload.cohort_slug);
    checks.finish()
}

pub fn user_create(payload: &UserCreate) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::default();
    checks.require("name", &payload.name);
    checks.require("role", &payload.role);
    checks.email("email", &payload.email);
    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn course_create_collects_all_field_errors() {
        let payload = CourseCreate {
            title: " ".into(),
            description: "desc".into(),
            category: String::new(),
            level: "beginner".into(),
            price: -5.0,
            image_url: None,
        };
        let errors = course_create(&payload).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "category", "price"]);
    }

    #[test]
    fn cohort_create_rejects_inverted_date_range() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let payload = CohortCreate {
            name: "Spring".into(),
            course_slug: "intro".into(),
            status: "active".into(),
            start_date: start,
            end_date: end,
            capacity: None,
        };
        let errors = cohort_create(&payload).unwrap_err();
        assert_eq!(errors[0].field, "end_date");
    }

    #[test]
    fn member_create_validates_email_shape() {
        let mut payload = OrganizationMemberCreate {
            organization_slug: "acme".into(),
            name: "Sam".into(),
            email: "not-an-email".into(),
            role: "learner".into(),
        };
        assert!(member_create(&payload).is_err());

        payload.email = "sam@acme.com".into();
        assert!(member_create(&payload).is_ok());
    }

    #[test]
    fn library_item_create_requires_resource_url() {
        let mut payload = LibraryItemCreate {
            title: "Style Guide".into(),
            description: "House style for reports".into(),
            category: "Templates".into(),
            thumbnail_url: None,
            resource_url: String::new(),
        };
        let errors = library_item_create(&payload).unwrap_err();
        assert_eq!(errors[0].field, "resource_url");

        payload.resource_url = "https://cdn.example.com/guide.pdf".into();
        assert!(library_item_create(&payload).is_ok());
    }

    #[test]
    fn recap_material_create_requires_title_and_cohort() {
        let session_date = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let payload = RecapMaterialCreate {
            cohort_slug: String::new(),
            title: " ".into(),
            session_date,
            video_url: None,
            notes: None,
        };
        let errors = recap_material_create(&payload).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "cohort_slug"]);
    }

    #[test]
    fn user_create_validates_email_shape() {
        let mut payload = UserCreate {
            name: "Dana".into(),
            email: "dana@".into(),
            role: "admin".into(),
            organization_slug: None,
        };
        assert!(user_create(&payload).is_err());

        payload.email = "dana@learnhub.io".into();
        assert!(user_create(&payload).is_ok());
    }
}
