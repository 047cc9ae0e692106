use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_ARCHIVE_TAP_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";
pub const DEFAULT_SUMMARY_MODEL: &str = "gpt-4o-mini-2024-07-18";
const DEFAULT_SUMMARY_TIMEOUT_SECS: &str = "60";

/// Settings shared by both binaries for the tracing/OTLP pipeline.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub environment: String,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl TelemetryConfig {
    fn from_env(default_service_name: &str) -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            otel_service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| default_service_name.to_string()),
            otel_exporter_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub archive_tap_url: String,
    pub openai_api_key: String,
    pub summary_model: String,
    /// Upper bound on the narrative call; past it the placeholder is used.
    pub summary_timeout: Duration,
    pub telemetry: TelemetryConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: parse_number("APP_PORT", "8000")?,
            archive_tap_url: env::var("ARCHIVE_TAP_URL")
                .unwrap_or_else(|_| DEFAULT_ARCHIVE_TAP_URL.to_string()),
            openai_api_key: required_key(env::var("OPENAI_API_KEY").ok())?,
            summary_model: env::var("SUMMARY_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUMMARY_MODEL.to_string()),
            summary_timeout: Duration::from_secs(parse_number(
                "SUMMARY_TIMEOUT_SECS",
                DEFAULT_SUMMARY_TIMEOUT_SECS,
            )?),
            telemetry: TelemetryConfig::from_env("kepler-data-api"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub port: u16,
    pub api_url: String,
    pub telemetry: TelemetryConfig,
}

impl DashboardConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: parse_number("DASHBOARD_PORT", "8501")?,
            api_url: env::var("API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string())
                .trim_end_matches('/')
                .to_string(),
            telemetry: TelemetryConfig::from_env("kepler-dashboard"),
        })
    }
}

fn required_key(value: Option<String>) -> anyhow::Result<String> {
    value
        .filter(|k| !k.trim().is_empty())
        .context("OPENAI_API_KEY must be set")
}

fn parse_number<T: FromStr>(var: &str, default: &str) -> anyhow::Result<T> {
    env::var(var)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| anyhow::anyhow!("{var} must be a non-negative whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_key_required() {
        assert!(required_key(None).is_err());
        assert!(required_key(Some(String::new())).is_err());
        assert!(required_key(Some("  ".to_string())).is_err());
        assert_eq!(
            required_key(Some("sk-test".to_string())).unwrap(),
            "sk-test"
        );
    }

    #[test]
    fn test_parse_number_default_and_rejects_garbage() {
        let port: u16 = parse_number("KEPLER_TEST_UNSET_PORT", "8000").unwrap();
        assert_eq!(port, 8000);

        let err = parse_number::<u64>("KEPLER_TEST_UNSET_TIMEOUT", "soon").unwrap_err();
        assert!(err.to_string().contains("KEPLER_TEST_UNSET_TIMEOUT"));
    }

    #[test]
    fn test_default_summary_timeout_is_a_number() {
        let secs: u64 = DEFAULT_SUMMARY_TIMEOUT_SECS.parse().unwrap();
        assert!(secs > 0);
    }

    #[test]
    fn test_is_production() {
        let mut telemetry = TelemetryConfig {
            environment: "development".to_string(),
            otel_service_name: "kepler-data-api".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
        };
        assert!(!telemetry.is_production());
        telemetry.environment = "production".to_string();
        assert!(telemetry.is_production());
    }
}
