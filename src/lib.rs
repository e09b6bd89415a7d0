use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, db, utils};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{SqlxAdminRepo, SqlxProjectRepo};
use use_cases::{auth::AuthHandler, projects::ProjectHandler};

pub struct AppState {
    pub auth_handler: AuthHandler,
    pub project_handler: ProjectHandler,
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let admin_repo = Arc::new(SqlxAdminRepo::new(pool.clone()));
        let project_repo = Arc::new(SqlxProjectRepo::new(pool));

        AppState {
            auth_handler: AuthHandler::new(admin_repo, jwt_service),
            project_handler: ProjectHandler::new(project_repo),
            cookie_secure: config.is_production(),
        }
    }
}
