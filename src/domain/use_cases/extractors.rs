use actix_web::{web, FromRequest, HttpRequest};
use actix_web::http::header;
use futures_util::future::{ready, Ready};

use crate::constants::SESSION_COOKIE;
use crate::entities::token::Claims;
use crate::errors::AppError;
use crate::AppState;

/// Extractor for an authenticated admin session.
///
/// Pulls the token from the session cookie, falling back to a bearer
/// `Authorization` header, and verifies it against the server secret.
/// Any failure (missing, malformed, forged, expired) collapses to a 401.
/// Usage: add `session: AdminSession` as a handler parameter.
#[derive(Debug)]
pub struct AdminSession(pub Claims);

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState missing in request extensions");
            return ready(Err(AppError::InternalError("AppState not configured".to_string()).into()));
        };

        let claims = session_token_from_request(req)
            .and_then(|token| state.auth_handler.token_service.decode_session_token(&token).ok());

        match claims {
            Some(claims) => ready(Ok(AdminSession(claims))),
            None => ready(Err(AppError::Unauthenticated.into())),
        }
    }
}

/// Cookie takes precedence over the Authorization header when both are
/// present. An empty cookie value counts as absent, so a cleared cookie
/// does not block the header fallback.
pub fn session_token_from_request(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            let parts: Vec<&str> = value.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}
