use actix_web::{web, HttpResponse, Responder};

use crate::models::HealthResponse;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health_check));
}

/// Health check endpoint
///
/// GET /api/v1/healthz
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = match state.postgres.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            false
        }
    };

    let (status, db) = if db_healthy {
        ("ok", "connected")
    } else {
        ("error", "disconnected")
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        db: db.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
