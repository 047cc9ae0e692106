use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use kepler_data_api::dashboard::{self, ApiClient, DashboardState};
use kepler_data_api::telemetry::{HttpMakeSpan, HttpOnResponse, init_telemetry};
use kepler_data_api::{DashboardConfig, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env()?;

    let telemetry_guard = init_telemetry(&config.telemetry)?;

    tracing::info!(
        port = config.port,
        api_url = %config.api_url,
        timeout_secs = dashboard::API_TIMEOUT.as_secs(),
        "Starting kepler dashboard"
    );

    let state = DashboardState {
        api: ApiClient::new(&config.api_url)?,
    };

    let app = dashboard::create_router(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(HttpMakeSpan)
            .on_response(HttpOnResponse),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Dashboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Dashboard shutdown complete");
    telemetry_guard.shutdown();

    Ok(())
}
