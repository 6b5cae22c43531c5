// src/main.rs

use std::{error::Error, sync::Arc};

use studyhelper::{
    config::Config,
    generation::{
        TextGenerator,
        client::{OpenAiGenerator, UnavailableGenerator},
    },
    routes,
    state::AppState,
    store::{MemoryStore, PgStore, Store},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration from environment (.env is read if present)
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let store: Arc<dyn Store> = match &config.database_url {
        Some(database_url) => Arc::new(PgStore::connect(database_url).await?),
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store. Data is lost on restart.");
            Arc::new(MemoryStore::new())
        }
    };

    let generator: Arc<dyn TextGenerator> = match &config.ai.api_key {
        Some(api_key) => {
            tracing::info!(model = %config.ai.model, base_url = %config.ai.base_url, "Text generation enabled");
            Arc::new(OpenAiGenerator::new(&config.ai, api_key.clone())?)
        }
        None => {
            tracing::warn!("AI_API_KEY not set, all generation requests will use fallback content");
            Arc::new(UnavailableGenerator)
        }
    };

    let addr = config.bind_addr;

    let state = AppState {
        store,
        generator,
        config,
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
