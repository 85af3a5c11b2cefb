mod api_client;
mod config;
mod errors;
mod i18n;
mod routes;
mod sanitize;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::i18n::catalog::LocaleCatalogs;
use crate::i18n::translate::Translator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MatchPoint web v{}", env!("CARGO_PKG_VERSION"));

    // Message catalogs: parsed once here, read-only for the process lifetime
    let catalogs = Arc::new(LocaleCatalogs::load()?);
    let translator = Translator::new(catalogs, config.default_locale);
    info!(
        "Message catalogs loaded (default locale: {})",
        config.default_locale
    );

    // Client for the upstream product API
    let api = ApiClient::new(&config.api_base_url);
    info!("Product API client initialized ({})", config.api_base_url);

    // Build app state
    let state = AppState {
        config: config.clone(),
        translator,
        api,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
