use std::sync::Arc;

use anyhow::Context;
use discovery_engine_client::DiscoveryEngineClient;
use discovery_engine_client::auth::{GcpTokenSource, StaticTokenSource, TokenSource};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::http::AppState;

mod config;
mod handler;
mod http;
mod models;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_file(true)
        .with_line_number(true)
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .flatten_event(true)
        .init();

    tracing::info!("initiating search import trigger");

    let config = Config::from_env();
    tracing::info!("initialized config");

    let token_source: Arc<dyn TokenSource> = match &config.access_token {
        Some(token) => Arc::new(StaticTokenSource::new(token.clone())),
        None => Arc::new(
            GcpTokenSource::resolve()
                .await
                .context("could not resolve google credentials")?,
        ),
    };

    let endpoint = config.api_endpoint();
    let client = DiscoveryEngineClient::new(token_source, endpoint.clone());
    tracing::info!(endpoint = %endpoint, "initialized discovery engine client");

    http::setup_and_serve(AppState {
        client: Arc::new(client),
        config: Arc::new(config),
    })
    .await
}
