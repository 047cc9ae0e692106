use std::time::Instant;

use opentelemetry::KeyValue;
use reqwest::StatusCode;

use super::row::TceRow;
use crate::error::{AppError, AppResult};
use crate::telemetry::metrics::{ARCHIVE_REQUEST_DURATION, ARCHIVE_ROWS};

pub const TCE_TABLE: &str = "q1_q17_dr25_tce";

const FETCH_FAILED: &str = "Failed to retrieve data from NASA";

/// Thin client over the archive's synchronous TAP endpoint.
#[derive(Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    tap_url: String,
}

impl ArchiveClient {
    pub fn new(tap_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            tap_url: tap_url.into(),
        }
    }

    pub fn tap_url(&self) -> &str {
        &self.tap_url
    }

    /// ADQL selecting every candidate of one star, in planet-number order.
    pub fn tce_query(kepid: i64) -> String {
        format!("SELECT * FROM {TCE_TABLE} WHERE kepid = {kepid} ORDER BY tce_plnt_num")
    }

    #[tracing::instrument(
        name = "archive fetch",
        skip(self),
        fields(
            archive.url = %self.tap_url,
            archive.status,
            archive.rows,
        )
    )]
    pub async fn fetch_tces(&self, kepid: i64) -> AppResult<Vec<TceRow>> {
        let start = Instant::now();
        let query = Self::tce_query(kepid);

        let result = self
            .client
            .get(&self.tap_url)
            .query(&[
                ("REQUEST", "doQuery"),
                ("LANG", "ADQL"),
                ("QUERY", query.as_str()),
                ("FORMAT", "json"),
            ])
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                record_duration(start, "transport_error");
                tracing::error!(error = %e, "Archive request could not be sent");
                return Err(AppError::Upstream {
                    status: StatusCode::BAD_GATEWAY.as_u16(),
                    message: FETCH_FAILED.to_string(),
                });
            }
        };

        let status = response.status();
        let span = tracing::Span::current();
        span.record("archive.status", status.as_u16());
        record_duration(start, status.as_str());

        if status != StatusCode::OK {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: FETCH_FAILED.to_string(),
            });
        }

        let rows: Vec<TceRow> = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Archive response was not a JSON row array");
            AppError::Upstream {
                status: StatusCode::BAD_GATEWAY.as_u16(),
                message: FETCH_FAILED.to_string(),
            }
        })?;

        span.record("archive.rows", rows.len());
        ARCHIVE_ROWS.record(rows.len() as f64, &[]);

        if rows.is_empty() {
            return Err(AppError::NotFound(format!("No data found for KepID {kepid}")));
        }

        tracing::debug!(kepid, rows = rows.len(), "Archive rows retrieved");

        Ok(rows)
    }
}

fn record_duration(start: Instant, outcome: &str) {
    ARCHIVE_REQUEST_DURATION.record(
        start.elapsed().as_secs_f64(),
        &[KeyValue::new("archive.outcome", outcome.to_string())],
    );
}
