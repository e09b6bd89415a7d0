use jsonwebtoken::{encode, Header, decode, Validation, Algorithm};
use chrono::{Utc, Duration};

use crate::entities::admin::Admin;
use crate::entities::token::Claims;
use crate::errors::AppError;
use crate::settings::{AppConfig, JwtKeys};

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    session_ttl: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            session_ttl: Duration::hours(config.session_ttl_hours),
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn create_session_token(&self, admin: &Admin) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = (now + self.session_ttl).timestamp() as usize;

        let claims = Claims {
            sub: admin.id.to_string(),
            username: admin.username.clone(),
            iat: now.timestamp() as usize,
            exp,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|e| AppError::InternalError(format!("Token creation failed: {}", e)))
    }

    /// Verifies signature and expiry. Expired, malformed, and forged tokens
    /// all collapse to `Unauthenticated`; callers treat the error as "deny".
    pub fn decode_session_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthenticated)
    }
}
