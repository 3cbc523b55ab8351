use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_api::config::Config;
use resume_api::routes::build_router;
use resume_api::state::AppState;
use resume_api::store::{AnalysisStore, InMemoryAnalysisStore, RedisAnalysisStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_api={},tower_http={}", config.rust_log, config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn AnalysisStore> = match &config.redis_url {
        Some(url) => {
            let store = RedisAnalysisStore::new(url, config.analysis_ttl_secs)?;
            info!(ttl_secs = config.analysis_ttl_secs, "Redis analysis store initialized");
            Arc::new(store)
        }
        None => {
            warn!(
                ttl_secs = config.analysis_ttl_secs,
                "REDIS_URL not set; analyses are kept in memory and lost on restart"
            );
            Arc::new(InMemoryAnalysisStore::new(Duration::from_secs(
                config.analysis_ttl_secs,
            )))
        }
    };

    let state = AppState {
        config: config.clone(),
        store,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
