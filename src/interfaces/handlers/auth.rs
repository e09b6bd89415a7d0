use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::instrument;

use crate::constants::SESSION_COOKIE;
use crate::entities::admin::LoginRequest;
use crate::errors::AppError;
use crate::use_cases::extractors::AdminSession;
use crate::AppState;

#[instrument(skip(state, body))]
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let session = state.auth_handler.login(body.into_inner()).await?;

    let max_age = state.auth_handler.token_service.session_ttl().num_seconds();
    let cookie = session_cookie(&session.token, max_age, state.cookie_secure);

    Ok(HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "message": "Login successful",
        "username": session.username
    })))
}

/// Logout is a transport concern only: sessions are stateless, so clearing
/// the cookie is all there is to do.
#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    let cookie = session_cookie("", 0, state.cookie_secure);

    HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "message": "Logged out successfully"
    }))
}

#[get("/verify")]
pub async fn verify(session: AdminSession) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Authenticated",
        "username": session.0.username
    }))
}

fn session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> Cookie<'_> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::seconds(max_age_seconds))
        .finish()
}
