use std::sync::Arc;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use dmcloser_backend::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dmcloser_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env()?;
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, /api/closer will answer with a configuration error");
    }
    tracing::info!(
        "Using completion API at {} with model {}",
        config.openai_api_base,
        config.model
    );
    tracing::info!("Serving frontend from {}", config.static_dir.display());

    let port = config.port;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
