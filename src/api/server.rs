use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::signup;
use crate::config::Config;
use crate::error::Result;
use crate::store::CsvStore;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: CsvStore,
}

/// Build the router for the sign-up service.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(signup::show_form))
        .route("/signup", post(signup::submit))
        .route("/api/signup", post(signup::register))
        .route("/health", get(|| async { "OK" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn start_server(config: &Config) -> Result<()> {
    let state = Arc::new(AppState {
        store: CsvStore::new(config.storage.csv_path.clone()),
    });

    let app = build_router(state);

    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    info!(
        "sign-up server listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
