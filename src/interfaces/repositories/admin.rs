use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    entities::admin::Admin,
    errors::AppError,
    repositories::sqlx_repo::SqlxAdminRepo,
};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn get_by_username(&self, username: &str) -> Result<Option<Admin>, AppError>;
    async fn touch_last_login(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxAdminRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxAdminRepo { pool }
    }
}

#[async_trait]
impl AdminRepository for SqlxAdminRepo {
    async fn get_by_username(&self, username: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, username, password_hash, created_at, last_login
             FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn touch_last_login(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE admins SET last_login = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
