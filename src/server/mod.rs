mod app_error;
mod handlers;

use anyhow::{Context, Result};
use axum::{Router, response::IntoResponse, routing::get};
use std::sync::Arc;
use tracing::info;

use crate::{
    config::Config,
    server::handlers::{delete_event, get_event, get_events, post_event},
    storage::EventStorage,
};

/// Shared application state.
struct AppState {
    store: Arc<dyn EventStorage + Send + Sync + 'static>,
}

/// Dummy handler to show the server is running.
async fn welcome() -> impl IntoResponse {
    "Calendar event store is up."
}

/// Creates a new server around the given storage. Used for testing, too.
pub fn make_server(store: Arc<dyn EventStorage + Send + Sync + 'static>) -> Router {
    let shared_state = Arc::new(AppState { store });
    Router::new()
        .route("/events", get(get_events).post(post_event))
        .route("/events/{id}", get(get_event).delete(delete_event))
        .route("/", get(welcome))
        .with_state(shared_state)
}

/// Starts the server on the configured port.
pub async fn serve(config: Config) -> Result<()> {
    let store = Arc::new(config.load_storage().await?);
    let app = make_server(store);

    info!("Listening on http://localhost:{}", config.port);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("Failed to bind to port {}", config.port))?;

    axum::serve(listener, app)
        .await
        .with_context(|| "Failed to start server")
}
