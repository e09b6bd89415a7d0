use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::entities::project::{Project, ProjectInput, UpdateProjectRequest};
use crate::errors::AppError;
use crate::repositories::project::ProjectRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct ProjectHandler {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        ProjectHandler { project_repo }
    }

    /// All projects, newest first. `featured_only` restricts the listing to
    /// featured ones.
    pub async fn list_projects(&self, featured_only: bool) -> Result<Vec<Project>, AppError> {
        self.project_repo.list(featured_only).await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let id = valid_uuid(id)?;
        self.project_repo
            .get(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn create_project(&self, input: ProjectInput) -> Result<Uuid, AppError> {
        input.validate()?;
        let insert = input.prepare_for_insert();
        self.project_repo.insert(&insert).await
    }

    /// Merge update: only the fields present in the request are applied,
    /// `updated_at` is refreshed either way.
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<(), AppError> {
        let id = valid_uuid(id)?;
        request.validate()?;

        let matched = self.project_repo.update(&id, &request).await?;
        if !matched {
            return Err(AppError::NotFound("Project not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let id = valid_uuid(id)?;

        let deleted = self.project_repo.delete(&id).await?;
        if !deleted {
            return Err(AppError::NotFound("Project not found".to_string()));
        }
        Ok(())
    }
}
