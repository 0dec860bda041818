use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use name_occurrences::shared::infrastructure::state_store::dapr::DaprStateStore;
use name_occurrences::shell::config::AppConfig;
use name_occurrences::shell::http::router;
use name_occurrences::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::load()?;
    let state_store = Arc::new(DaprStateStore::new(&config.dapr_host, config.dapr_http_port)?);
    let state = AppState::new(&config, state_store);

    let addr: SocketAddr = format!("{}:{}", config.app_host, config.app_port).parse()?;
    tracing::info!(
        %addr,
        state_store = %config.state_store_name,
        pubsub = %config.pubsub_name,
        topic = %config.topic,
        "names subscriber listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
