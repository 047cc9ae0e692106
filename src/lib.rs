pub mod archive;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod llm;
pub mod report;
pub mod routes;
pub mod telemetry;

use std::sync::Arc;

use tokio::signal;

pub use config::{Config, DashboardConfig};

use archive::ArchiveClient;
use llm::LlmClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub archive: ArchiveClient,
    pub llm_client: Arc<LlmClient>,
}

impl AppState {
    pub fn new(config: Config, llm_client: Arc<LlmClient>) -> Self {
        Self {
            archive: ArchiveClient::new(config.archive_tap_url.clone()),
            config,
            llm_client,
        }
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
