use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use translation_backend::app;
use translation_backend::config::settings::AppConfig;
use translation_backend::infrastructure::db::pool;
use translation_backend::infrastructure::storage::local::LocalStorage;
use translation_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting translation backend...");

    let config = AppConfig::new();

    let db = pool::connect_to_db(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let storage = LocalStorage::new(&config.storage_root, "videos");

    let state = AppState::new(config.clone(), db, storage);
    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
