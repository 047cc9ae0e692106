use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use kepler_data_api::llm::{LlmClient, OpenAIProvider};
use kepler_data_api::telemetry::init_telemetry;
use kepler_data_api::{AppState, Config, routes, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let telemetry_guard = init_telemetry(&config.telemetry)?;

    tracing::info!(
        port = config.port,
        environment = %config.telemetry.environment,
        archive = %config.archive_tap_url,
        model = %config.summary_model,
        summary_timeout_secs = config.summary_timeout.as_secs(),
        "Starting kepler-data-api"
    );

    let provider = Arc::new(OpenAIProvider::new(&config.openai_api_key));
    let state = AppState::new(config.clone(), Arc::new(LlmClient::new(provider)));
    let app = routes::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    telemetry_guard.shutdown();

    Ok(())
}
