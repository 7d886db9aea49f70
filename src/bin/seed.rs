//! Replace the certification and toy collections with the reference catalog.

use eco_toy_guide::config::Settings;
use eco_toy_guide::seed::{attach_certifications, CERTIFICATIONS, TOYS};
use eco_toy_guide::services::PostgresClient;
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("Seeding failed: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;

    let postgres = PostgresClient::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
    )
    .await?;

    info!("Seeding certifications...");
    let certifications = postgres.replace_certifications(CERTIFICATIONS).await?;
    info!("Inserted {} certifications", certifications.len());

    info!("Seeding toys...");
    let toys = attach_certifications(TOYS, &certifications);
    let inserted = postgres.replace_toys(&toys).await?;
    info!("Inserted {} toys", inserted);

    info!("Seeding complete");
    Ok(())
}
