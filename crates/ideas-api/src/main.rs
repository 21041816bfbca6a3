mod config;
mod db;
mod error;
mod routes;


use std::sync::Arc;

use config::AppConfig;
use db::IdeaRepository;
use routes::{app_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only load .env in development; production uses platform-native env injection.
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ideas_api=info".parse().expect("valid directive")),
        )
        .init();

    let config = Arc::new(AppConfig::from_env()?);
    tracing::info!("Starting ideas-api with config: {:?}", config);

    let repo = IdeaRepository::open(&config.db_path)?;
    let state = AppState::new(config, repo);
    let bind_addr = state.config.bind_addr.clone();
    let router = app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("ideas-api listening on {}", bind_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
