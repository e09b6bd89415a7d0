#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use devfolio_backend::auth::jwt::JwtService;
use devfolio_backend::auth::password::hash_password;
use devfolio_backend::entities::admin::Admin;
use devfolio_backend::entities::project::{Project, ProjectInsert, UpdateProjectRequest};
use devfolio_backend::errors::AppError;
use devfolio_backend::repositories::admin::AdminRepository;
use devfolio_backend::repositories::project::ProjectRepository;
use devfolio_backend::routes::configure_routes;
use devfolio_backend::settings::{AppConfig, AppEnvironment};
use devfolio_backend::use_cases::{auth::AuthHandler, projects::ProjectHandler};
use devfolio_backend::AppState;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "CorrectHorse9!";
pub const TEST_JWT_SECRET: &str = "test_jwt_secret_that_is_long_enough_for_hs512_1234567890";

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Devfolio Backend Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://unused-in-tests".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: TEST_JWT_SECRET.to_string(),
        session_ttl_hours: 24,
    }
}

pub fn test_admin() -> Admin {
    Admin {
        id: Uuid::new_v4(),
        username: TEST_USERNAME.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("Failed to hash password"),
        created_at: Utc::now(),
        last_login: None,
    }
}

/// Mints a token accepted by the test app (same secret, same TTL).
pub fn session_token() -> String {
    JwtService::new(&test_config())
        .create_session_token(&test_admin())
        .expect("Failed to create session token")
}

// ---------------------------------------------------------------------------
// In-memory repository fakes
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryAdminRepo {
    admins: Mutex<Vec<Admin>>,
}

impl InMemoryAdminRepo {
    pub fn with_admin(admin: Admin) -> Self {
        InMemoryAdminRepo {
            admins: Mutex::new(vec![admin]),
        }
    }

    pub fn get(&self, username: &str) -> Option<Admin> {
        self.admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepo {
    async fn get_by_username(&self, username: &str) -> Result<Option<Admin>, AppError> {
        Ok(self.get(username))
    }

    async fn touch_last_login(&self, id: &Uuid) -> Result<(), AppError> {
        let mut admins = self.admins.lock().unwrap();
        if let Some(admin) = admins.iter_mut().find(|a| &a.id == id) {
            admin.last_login = Some(Utc::now());
        }
        Ok(())
    }
}

/// Mirrors the SQL repository's contract: stable newest-first ordering,
/// COALESCE-style merge updates, unconditional `updated_at` refresh.
#[derive(Default)]
pub struct InMemoryProjectRepo {
    rows: Mutex<Vec<Project>>,
}

impl InMemoryProjectRepo {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepo {
    async fn insert(&self, project: &ProjectInsert) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().push(Project {
            id,
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            link: project.link.clone(),
            tech: project.tech.clone(),
            featured: project.featured,
            created_at: project.created_at,
            updated_at: project.updated_at,
        });
        Ok(id)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| &p.id == id).cloned())
    }

    async fn list(&self, featured_only: bool) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !featured_only || p.featured)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn update(&self, id: &Uuid, patch: &UpdateProjectRequest) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(project) = rows.iter_mut().find(|p| &p.id == id) else {
            return Ok(false);
        };

        if let Some(title) = &patch.title {
            project.title = title.clone();
        }
        if let Some(description) = &patch.description {
            project.description = description.clone();
        }
        if let Some(image) = &patch.image {
            project.image = image.clone();
        }
        if let Some(link) = &patch.link {
            project.link = Some(link.clone());
        }
        if let Some(tech) = &patch.tech {
            project.tech = tech.clone();
        }
        if let Some(featured) = patch.featured {
            project.featured = featured;
        }
        project.updated_at = Utc::now();

        Ok(true)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| &p.id != id);
        Ok(rows.len() < before)
    }
}

/// Store whose every operation fails, standing in for a lost database
/// connection.
pub struct FailingProjectRepo;

#[async_trait]
impl ProjectRepository for FailingProjectRepo {
    async fn insert(&self, _: &ProjectInsert) -> Result<Uuid, AppError> {
        Err(AppError::InternalError("connection reset".to_string()))
    }

    async fn get(&self, _: &Uuid) -> Result<Option<Project>, AppError> {
        Err(AppError::InternalError("connection reset".to_string()))
    }

    async fn list(&self, _: bool) -> Result<Vec<Project>, AppError> {
        Err(AppError::InternalError("connection reset".to_string()))
    }

    async fn update(&self, _: &Uuid, _: &UpdateProjectRequest) -> Result<bool, AppError> {
        Err(AppError::InternalError("connection reset".to_string()))
    }

    async fn delete(&self, _: &Uuid) -> Result<bool, AppError> {
        Err(AppError::InternalError("connection reset".to_string()))
    }
}

// ---------------------------------------------------------------------------
// App assembly
// ---------------------------------------------------------------------------

pub fn build_state(
    admin_repo: Arc<InMemoryAdminRepo>,
    project_repo: Arc<InMemoryProjectRepo>,
) -> AppState {
    let config = test_config();
    AppState {
        auth_handler: AuthHandler::new(admin_repo, JwtService::new(&config)),
        project_handler: ProjectHandler::new(project_repo),
        cookie_secure: false,
    }
}

pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await
}

/// App whose project store fails every operation.
pub async fn spawn_app_with_failing_store(
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let config = test_config();
    let state = AppState {
        auth_handler: AuthHandler::new(
            Arc::new(InMemoryAdminRepo::with_admin(test_admin())),
            JwtService::new(&config),
        ),
        project_handler: ProjectHandler::new(Arc::new(FailingProjectRepo)),
        cookie_secure: false,
    };
    init_app(state).await
}

/// App with one seeded admin and an empty project store; returns the repo
/// handles for direct inspection.
pub async fn spawn_app() -> (
    impl Service<Request, Response = ServiceResponse, Error = Error>,
    Arc<InMemoryAdminRepo>,
    Arc<InMemoryProjectRepo>,
) {
    let admin_repo = Arc::new(InMemoryAdminRepo::with_admin(test_admin()));
    let project_repo = Arc::new(InMemoryProjectRepo::default());
    let app = init_app(build_state(admin_repo.clone(), project_repo.clone())).await;
    (app, admin_repo, project_repo)
}
