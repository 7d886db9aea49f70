use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/certifications", web::get().to(list_certifications));
}

/// List every certification
///
/// GET /api/v1/certifications
async fn list_certifications(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let certifications = state.postgres.get_certifications(None).await?;

    Ok(HttpResponse::Ok().json(certifications))
}
