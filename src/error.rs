use actix_web::{error, http::header, http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::CatalogError;
use crate::models::ErrorResponse;
use crate::services::{AuthError, DatabaseError};

/// Errors returned from HTTP handlers, rendered as JSON `ErrorResponse`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Short machine-readable error label
    pub fn label(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::NotFound(_) => "not_found",
            ApiError::Internal(_) => "internal_error",
        }
    }

    pub fn credentials() -> Self {
        ApiError::Unauthorized("Could not validate credentials".to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let mut builder = HttpResponse::build(status);

        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(ErrorResponse {
            error: self.label().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => ApiError::NotFound("Toy not found".to_string()),
            CatalogError::QueryFailed(source) => {
                tracing::error!("Catalog query failed: {}", source);
                ApiError::Internal(format!("Database error: {}", source))
            }
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(what) => ApiError::NotFound(format!("{} not found", what)),
            DatabaseError::Conflict(message) => ApiError::BadRequest(message),
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::Internal(format!("Database error: {}", other))
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect email or password".to_string())
            }
            AuthError::InvalidToken(_) => ApiError::credentials(),
            other => {
                tracing::error!("Auth error: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::BadRequest(format!("Validation failed: {}", errors))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid query: {}", err)).into()
}
