// Route exports
pub mod auth;
pub mod certifications;
pub mod extract;
pub mod health;
pub mod toys;
pub mod users;

use actix_web::web;
use std::sync::Arc;

use crate::core::CatalogQuery;
use crate::services::{CachedStore, PostgresClient, TokenService};

/// Catalog store used by the toy routes in the running server
pub type ServerCatalogStore = CachedStore<PostgresClient>;

/// Application state shared across all handlers
///
/// The catalog store is registered separately as `web::Data<S>` so the
/// toy routes can run against any `CatalogStore`.
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub catalog: CatalogQuery,
    pub tokens: Arc<TokenService>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure)
            .configure(auth::configure)
            .configure(certifications::configure)
            .configure(toys::configure::<ServerCatalogStore>)
            .configure(users::configure),
    );
}
