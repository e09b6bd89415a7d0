use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::entities::project::{ProjectInput, UpdateProjectRequest};
use crate::errors::AppError;
use crate::use_cases::extractors::AdminSession;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub featured: Option<bool>,
}

#[instrument(skip(state, query))]
#[get("")]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ListProjectsQuery>,
) -> Result<impl Responder, AppError> {
    let featured_only = query.featured.unwrap_or(false);
    let projects = state.project_handler.list_projects(featured_only).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "projects": projects })))
}

#[instrument(skip(state, id))]
#[get("/{id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project(&id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "project": project })))
}

#[instrument(skip(_session, state, data))]
#[post("")]
pub async fn create_project(
    _session: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<ProjectInput>,
) -> Result<impl Responder, AppError> {
    let id = state.project_handler.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Project created successfully",
        "id": id
    })))
}

#[instrument(skip(_session, state, id, data))]
#[put("/{id}")]
pub async fn update_project(
    _session: AdminSession,
    state: web::Data<AppState>,
    id: web::Path<String>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    state.project_handler.update_project(&id, data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Project updated successfully"
    })))
}

#[instrument(skip(_session, state, id))]
#[delete("/{id}")]
pub async fn delete_project(
    _session: AdminSession,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Project deleted successfully"
    })))
}
