use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{LoginRequest, SignupRequest, TokenResponse};
use crate::routes::AppState;
use crate::services::{hash_password, verify_password, AuthError};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/signup", web::post().to(signup))
        .route("/auth/login", web::post().to(login));
}

/// Create an account
///
/// POST /api/v1/auth/signup
///
/// Request body:
/// ```json
/// { "email": "string", "password": "string" }
/// ```
async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let SignupRequest { email, password } = req.into_inner();

    let hashed = web::block(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))??;

    let user = state.postgres.create_user(&email, &hashed).await?;

    Ok(HttpResponse::Created().json(user))
}

/// Exchange credentials for a bearer token
///
/// POST /api/v1/auth/login
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let LoginRequest { email, password } = req.into_inner();

    let account = state
        .postgres
        .find_account_by_email(&email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let hashed = account.hashed_password.clone();
    web::block(move || verify_password(&password, &hashed))
        .await
        .map_err(|e| ApiError::Internal(format!("Password verification failed: {}", e)))??;

    let token = state.tokens.issue(&account.user.id)?;

    tracing::info!("User {} logged in", account.user.id);

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}
