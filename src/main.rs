use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use eco_toy_guide::config::{LoggingSettings, ServerSettings, Settings};
use eco_toy_guide::core::CatalogQuery;
use eco_toy_guide::error::{handle_json_payload_error, handle_query_payload_error};
use eco_toy_guide::routes::{self, AppState};
use eco_toy_guide::services::{CachedStore, PostgresClient, TokenService};

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn build_cors(server: &ServerSettings) -> Cors {
    if server.cors_origins.is_empty() {
        return Cors::permissive();
    }

    server
        .cors_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Eco Toy Guide service...");

    let tokens = TokenService::new(
        &settings.auth.jwt_secret,
        &settings.auth.jwt_algorithm,
        settings.auth.access_token_expire_minutes,
    )
    .map_err(|e| {
        error!("Invalid auth configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let postgres = Arc::new(
        PostgresClient::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
        )
        .await
        .map_err(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
        })?,
    );

    info!("PostgreSQL client initialized");

    let catalog_store = Arc::new(CachedStore::new(
        postgres.clone(),
        settings.cache.capacity,
        settings.cache.certification_ttl_secs,
    ));

    let catalog = CatalogQuery::new(
        settings.catalog.max_results,
        settings.catalog.max_certifications,
    );

    info!("Catalog initialized: {:?}", catalog);

    let app_state = AppState {
        postgres,
        catalog,
        tokens: Arc::new(tokens),
    };

    let server_settings = settings.server.clone();
    let workers = server_settings.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", server_settings.host, server_settings.port);

    let bind = (server_settings.host.clone(), server_settings.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::from(catalog_store.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(build_cors(&server_settings))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind(bind)?
    .run()
    .await
}
