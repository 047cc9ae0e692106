#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::Value;
use tokio::net::TcpListener;

use kepler_data_api::config::{Config, DEFAULT_SUMMARY_MODEL, TelemetryConfig};
use kepler_data_api::llm::{ChatCompletion, ChatRequest, LlmClient, Provider};
use kepler_data_api::AppState;

pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stand-in for the TAP sync endpoint; returns the same canned answer for every query.
pub async fn spawn_archive(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/TAP/sync",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    format!("{}/TAP/sync", serve(app).await)
}

/// `reply: None` makes every LLM call fail; `delay` holds the reply back.
pub struct ScriptedProvider {
    pub reply: Option<String>,
    pub delay: Duration,
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, req: &ChatRequest) -> anyhow::Result<ChatCompletion> {
        tokio::time::sleep(self.delay).await;
        match &self.reply {
            Some(text) => Ok(ChatCompletion {
                content: text.clone(),
                model: req.model.clone(),
                input_tokens: 500,
                output_tokens: 60,
                finish_reason: Some("stop".to_string()),
            }),
            None => Err(anyhow::anyhow!("429 insufficient_quota")),
        }
    }
}

pub fn config(archive_tap_url: &str) -> Config {
    Config {
        port: 0,
        archive_tap_url: archive_tap_url.to_string(),
        openai_api_key: "sk-test".to_string(),
        summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
        summary_timeout: Duration::from_secs(60),
        telemetry: TelemetryConfig {
            environment: "test".to_string(),
            otel_service_name: "kepler-data-api-test".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
        },
    }
}

/// `summary: None` makes every LLM call fail.
pub fn app_state(archive_tap_url: &str, summary: Option<&str>) -> AppState {
    slow_app_state(config(archive_tap_url), summary, Duration::ZERO)
}

pub fn slow_app_state(config: Config, summary: Option<&str>, delay: Duration) -> AppState {
    let provider = Arc::new(ScriptedProvider {
        reply: summary.map(str::to_string),
        delay,
    });
    AppState::new(config, Arc::new(LlmClient::new(provider)))
}
