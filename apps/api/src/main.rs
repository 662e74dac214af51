mod clock;
mod config;
mod errors;
mod experience;
mod models;
mod resume;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::resume::source::{load_profile, JsonFileSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let clock: Arc<dyn Clock> = match config.evaluation_date {
        Some(date) => {
            info!("Evaluation date pinned to {date}");
            Arc::new(FixedClock(date))
        }
        None => Arc::new(SystemClock),
    };

    // Load and validate resume data; any bad experience entry aborts startup
    let source = JsonFileSource::new(&config.resume_data_path);
    let profile = load_profile(&source, clock.as_ref()).await?;

    let state = AppState {
        config: config.clone(),
        profile: Arc::new(profile),
        clock,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
