use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

const PROJECT_COLUMNS: &str =
    "id, title, description, image, link, tech, featured, created_at, updated_at";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, project: &ProjectInsert) -> Result<Uuid, AppError>;
    async fn get(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn list(&self, featured_only: bool) -> Result<Vec<Project>, AppError>;
    /// Returns whether a row matched the id.
    async fn update(&self, id: &Uuid, patch: &UpdateProjectRequest) -> Result<bool, AppError>;
    /// Returns whether a row was deleted.
    async fn delete(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn insert(&self, project: &ProjectInsert) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO projects (title, description, image, link, tech, featured, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id",
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.link)
        .bind(&project.tech)
        .bind(project.featured)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn list(&self, featured_only: bool) -> Result<Vec<Project>, AppError> {
        let query = if featured_only {
            format!(
                "SELECT {PROJECT_COLUMNS} FROM projects
                 WHERE featured = TRUE ORDER BY created_at DESC"
            )
        } else {
            format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC")
        };

        let projects = sqlx::query_as::<_, Project>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn update(&self, id: &Uuid, patch: &UpdateProjectRequest) -> Result<bool, AppError> {
        // COALESCE keeps existing values for fields absent from the patch;
        // updated_at is refreshed unconditionally.
        let result = sqlx::query(
            "UPDATE projects SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                image = COALESCE($3, image),
                link = COALESCE($4, link),
                tech = COALESCE($5, tech),
                featured = COALESCE($6, featured),
                updated_at = NOW()
             WHERE id = $7",
        )
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.image)
        .bind(&patch.link)
        .bind(&patch.tech)
        .bind(patch.featured)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
