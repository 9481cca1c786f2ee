//! services/app/src/bin/smartx.rs
//!
//! Starts the device-local companion service.

use app_lib::{
    adapters::{OpenAiGenerationAdapter, SqliteKvAdapter},
    config::Config,
    error::AppError,
    web::{app_router, AppState},
};
use async_openai::{config::OpenAIConfig, Client};
use smartx_core::SmartxClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting companion service...");

    // --- 2. Open the Preference Database ---
    info!(url = %config.database_url, "Opening preference store...");
    let kv_store = Arc::new(SqliteKvAdapter::connect(&config.database_url).await?);
    info!("Preference store ready.");

    // --- 3. Initialize the Generation Adapter ---
    let mut openai_config = OpenAIConfig::new().with_api_key(config.require_generation_api_key()?);
    if let Some(base) = &config.generation_api_base {
        openai_config = openai_config.with_api_base(base);
    }
    let generator = Arc::new(OpenAiGenerationAdapter::new(
        Client::with_config(openai_config),
        config.assist_model.clone(),
        config.recommend_model.clone(),
    ));

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        client: SmartxClient::new(kv_store, generator),
        config: config.clone(),
    });

    // --- 5. Create the Web Router ---
    let app = app_router(app_state)?;

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
