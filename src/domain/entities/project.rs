use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: Option<String>,
    pub tech: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProjectInput {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: String,

    #[validate(url(message = "Link must be a valid URL"))]
    pub link: Option<String>,

    #[validate(
        length(min = 1, message = "At least one technology is required"),
        custom(function = validate_tech_entries, message = "Technology entries cannot be empty")
    )]
    pub tech: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

/// Column values for a freshly created project. Timestamps are fixed at
/// preparation time so `created_at == updated_at` on insert.
#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: Option<String>,
    pub tech: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectInput {
    pub fn prepare_for_insert(&self) -> ProjectInsert {
        let now = Utc::now();
        ProjectInsert {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            link: self.link.clone(),
            tech: self.tech.clone(),
            featured: self.featured,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update. Absent fields are left untouched; `updated_at` is
/// refreshed by the repository regardless of which fields are present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,

    #[validate(url(message = "Link must be a valid URL"))]
    pub link: Option<String>,

    #[validate(
        length(min = 1, message = "At least one technology is required"),
        custom(function = validate_tech_entries, message = "Technology entries cannot be empty")
    )]
    pub tech: Option<Vec<String>>,

    pub featured: Option<bool>,
}

fn validate_tech_entries(tech: &[String]) -> Result<(), ValidationError> {
    if tech.iter().any(|entry| entry.trim().is_empty()) {
        return Err(ValidationError::new("tech_entry_empty"));
    }
    Ok(())
}
