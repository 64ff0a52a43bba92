use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use discovery_engine_client::DiscoveryEngineClient;
use discovery_engine_client::error::DiscoveryEngineError;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handler;

/// Shared read-only state; one client per process.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<DiscoveryEngineClient>,
    pub config: Arc<Config>,
}

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("import submission failed: {0}")]
    Import(#[from] DiscoveryEngineError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        // A non-2xx response is what tells the event bus to redeliver
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

pub async fn setup_and_serve(state: AppState) -> anyhow::Result<()> {
    let port = state.config.port;
    let app = router(state).layer(TraceLayer::new_for_http());

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!("search import trigger is up and running on port {}", &port);

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(receive_event))
        .route("/health", get(health))
        .with_state(state)
}

/// Storage notifications from the event bus land here.
#[tracing::instrument(skip_all)]
async fn receive_event(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, HttpError> {
    handler::handle_storage_event(&state.client, &state.config, &payload).await?;

    // Skips and started imports both acknowledge the event; the import
    // operation itself completes out of process
    Ok(StatusCode::OK)
}

#[tracing::instrument]
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "search_import_trigger"
    }))
}
