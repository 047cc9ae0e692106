use std::time::Duration;

use crate::archive::ArchiveClient;
use crate::error::AppError;
use crate::llm::LlmClient;
use crate::telemetry::metrics::{REPORT_GENERATION_DURATION, REPORT_PLANETS};

use super::builder::build_report;
use super::model::SystemReport;
use super::summary::summarize;

/// Archive fetch, report build, then narrative. Strictly sequential; only
/// archive errors propagate.
#[tracing::instrument(
    name = "pipeline kepler_report",
    skip(archive, llm_client, summary_timeout),
    fields(
        report.planets,
        report.duration_ms,
    )
)]
pub async fn generate_system_report(
    archive: &ArchiveClient,
    llm_client: &LlmClient,
    model: &str,
    summary_timeout: Duration,
    kepid: i64,
) -> Result<SystemReport, AppError> {
    let start = std::time::Instant::now();

    // Stage 1: fetch candidate rows
    let rows = archive.fetch_tces(kepid).await?;

    // Stage 2: shape and annotate
    let mut report = build_report(kepid, &rows);

    // Stage 3: narrative
    report.smart_summary = summarize(llm_client, model, summary_timeout, &report).await;

    let duration = start.elapsed();
    REPORT_GENERATION_DURATION.record(duration.as_secs_f64(), &[]);
    REPORT_PLANETS.record(report.number_of_planets as f64, &[]);

    let span = tracing::Span::current();
    span.record("report.planets", report.number_of_planets);
    span.record("report.duration_ms", duration.as_millis() as u64);

    tracing::info!(
        star_system = %report.star_system,
        planets = report.number_of_planets,
        "Kepler report generated"
    );

    Ok(report)
}
