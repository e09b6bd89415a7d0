use std::sync::Arc;

use validator::Validate;

use crate::auth::jwt::JwtService;
use crate::auth::password::verify_password;
use crate::entities::admin::LoginRequest;
use crate::entities::token::IssuedSession;
use crate::errors::AppError;
use crate::repositories::admin::AdminRepository;

pub struct AuthHandler {
    pub admin_repo: Arc<dyn AdminRepository>,
    pub token_service: JwtService,
}

impl AuthHandler {
    pub fn new(admin_repo: Arc<dyn AdminRepository>, token_service: JwtService) -> Self {
        AuthHandler {
            admin_repo,
            token_service,
        }
    }

    /// Validates credentials and issues a signed session token.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response never reveals which usernames exist.
    pub async fn login(&self, request: LoginRequest) -> Result<IssuedSession, AppError> {
        request.validate()?;

        let admin = self.admin_repo
            .get_by_username(&request.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let is_password_valid = verify_password(&request.password, &admin.password_hash)?;
        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Best effort: a failed last-login write must not fail the login.
        if let Err(e) = self.admin_repo.touch_last_login(&admin.id).await {
            tracing::warn!("Failed to record last login: {}", e);
        }

        let token = self.token_service.create_session_token(&admin)?;

        tracing::info!("Admin logged in successfully");
        Ok(IssuedSession {
            token,
            username: admin.username,
        })
    }
}
