mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod startup;
mod state;
mod store;

use anyhow::Context;
use config::Config;
use state::AppState;
use std::sync::Arc;
use store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-local-store starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = FileStore::new(config.data_file.clone());
    let port = config.service_port;
    let address = format!("{}:{}", config.service_host, config.service_port);

    let state = AppState {
        store,
        config: Arc::new(config),
    };
    let app = startup::build_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to address {address}"))?;

    tracing::info!("Serving on http://localhost:{port}");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
