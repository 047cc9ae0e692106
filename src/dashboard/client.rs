use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::report::SystemReport;

pub const API_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(
        "Unable to connect to the API server. Please check if the server is running and the URL is correct."
    )]
    Connect,

    #[error("The request to the API server timed out. Please try again later.")]
    Timeout,

    #[error("An error occurred while fetching data: {0}")]
    Request(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            DashboardError::Connect
        } else if e.is_timeout() {
            DashboardError::Timeout
        } else {
            DashboardError::Request(e.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    detail: String,
}

/// HTTP client for the Kepler API, with a fixed request timeout.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, API_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "dashboard fetch_report", skip(self), fields(api.status))]
    pub async fn fetch_report(&self, kepid: u64) -> Result<SystemReport, DashboardError> {
        let response = self
            .client
            .get(format!("{}/kepler/{kepid}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        tracing::Span::current().record("api.status", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::Request(describe_status(status, &body)));
        }

        Ok(response.json::<SystemReport>().await?)
    }
}

fn describe_status(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => format!("{status}: {}", err.detail),
        Err(_) => status.to_string(),
    }
}
