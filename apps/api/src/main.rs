mod assessment;
mod catalog;
mod config;
mod errors;
mod interview;
mod market;
mod matching;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::interview::scoring::KeywordResponseScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Copilot API v{}", env!("CARGO_PKG_VERSION"));

    // Build and validate static catalogs — malformed configuration is a
    // programming error, so it aborts startup here.
    let catalog = Catalog::builtin();
    catalog.validate()?;
    info!(
        "Catalogs validated: {} skills, {} career paths, {} interview kinds, {} market roles",
        catalog.skills().count(),
        catalog.career_paths.len(),
        catalog.interview_kinds.len(),
        catalog.job_market.len()
    );

    // Initialize response scorer (KeywordResponseScorer — deterministic keyword overlap)
    let response_scorer = Arc::new(KeywordResponseScorer);

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        response_scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
