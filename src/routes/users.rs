use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::{ProfileUpdate, ScoredToy};
use crate::routes::extract::CurrentUser;
use crate::routes::toys::parse_toy_id;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users/me", web::get().to(read_me))
        .route("/users/me", web::patch().to(update_me))
        .route("/users/me/saved-toys", web::get().to(list_saved_toys))
        .route("/users/me/saved-toys/{toy_id}", web::post().to(save_toy))
        .route("/users/me/saved-toys/{toy_id}", web::delete().to(unsave_toy));
}

/// GET /api/v1/users/me
async fn read_me(CurrentUser(user): CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(user)
}

/// Update profile preferences; only supplied fields change
///
/// PATCH /api/v1/users/me
///
/// Request body:
/// ```json
/// { "child_age_range": "1-3 years", "eco_goals": ["Toxin-Free"], "interests": ["STEM"] }
/// ```
///
/// Sending `null` for a field clears it.
async fn update_me(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    update: web::Json<ProfileUpdate>,
) -> Result<HttpResponse, ApiError> {
    if update.is_empty() {
        return Ok(HttpResponse::Ok().json(user));
    }

    let updated = state.postgres.update_profile(&user.id, &update).await?;

    tracing::debug!("Updated profile for user {}", user.id);

    Ok(HttpResponse::Ok().json(updated))
}

/// Add a toy to the saved list
///
/// POST /api/v1/users/me/saved-toys/{toy_id}
async fn save_toy(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let toy_id = parse_toy_id(&path)?;

    if state.postgres.get_toy(&toy_id).await?.is_none() {
        return Err(ApiError::NotFound("Toy not found".to_string()));
    }

    if user.saved_toy_ids.contains(&toy_id) {
        return Ok(HttpResponse::Ok().json(user));
    }

    let updated = state.postgres.add_saved_toy(&user.id, &toy_id).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Remove a toy from the saved list
///
/// DELETE /api/v1/users/me/saved-toys/{toy_id}
async fn unsave_toy(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let updated = state.postgres.remove_saved_toy(&user.id, &path).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// List saved toys
///
/// GET /api/v1/users/me/saved-toys
async fn list_saved_toys(
    state: web::Data<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let toys = state
        .postgres
        .get_toys_by_ids(&user.saved_toy_ids, state.catalog.max_results())
        .await?
        .into_iter()
        .map(ScoredToy::unscored)
        .collect::<Vec<_>>();

    Ok(HttpResponse::Ok().json(toys))
}
