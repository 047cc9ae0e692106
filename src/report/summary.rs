use std::time::Duration;

use crate::llm::{ChatRequest, LlmClient};
use crate::telemetry::metrics::SUMMARY_FALLBACK_COUNT;

use super::model::SystemReport;

pub const SUMMARY_FALLBACK: &str = "Unable to generate summary at this time.";

const SYSTEM_INSTRUCTION: &str = "You are an AI astronomer assistant. You have to provide a short \
summary of the data you are receiving. The data is from NASA datasets about exoplanets. It will \
contain information about stars and potential exoplanets. Respond with a short summary of the \
data, including units and interesting facts if applicable. For example, if you notice something \
unusual or interesting in the data, feel free to mention that. Start with the name of the star. \
No need to format it just row text.";

pub fn summary_prompt(report_json: &str) -> String {
    format!(
        "Here is the data for a Kepler system:\n\n{report_json}\n\n\
        Please provide a concise summary of this Kepler system, highlighting its most \
        interesting features and potential for habitability or unusual characteristics."
    )
}

/// Ask the language model for a narrative of `report`. Never fails: an
/// error, an empty reply or a call outliving `timeout` is logged and
/// replaced by [`SUMMARY_FALLBACK`].
#[tracing::instrument(
    name = "report summarize",
    skip(llm_client, report, timeout),
    fields(
        report.star_system = %report.star_system,
        summary.fallback,
    )
)]
pub async fn summarize(
    llm_client: &LlmClient,
    model: &str,
    timeout: Duration,
    report: &SystemReport,
) -> String {
    let span = tracing::Span::current();

    let outcome = tokio::time::timeout(timeout, request_summary(llm_client, model, report))
        .await
        .unwrap_or_else(|_| {
            Err(anyhow::anyhow!(
                "summary request timed out after {:?}",
                timeout
            ))
        });

    let summary = match outcome {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, model, "Error generating summary");
            SUMMARY_FALLBACK_COUNT.add(1, &[]);
            SUMMARY_FALLBACK.to_string()
        }
    };

    span.record("summary.fallback", summary == SUMMARY_FALLBACK);
    summary
}

async fn request_summary(
    llm_client: &LlmClient,
    model: &str,
    report: &SystemReport,
) -> anyhow::Result<String> {
    let report_json = serde_json::to_string_pretty(report)?;

    let completion = llm_client
        .chat(&ChatRequest {
            model: model.to_string(),
            system: SYSTEM_INSTRUCTION.to_string(),
            prompt: summary_prompt(&report_json),
        })
        .await?;

    if completion.content.trim().is_empty() {
        anyhow::bail!("language model returned an empty completion");
    }
    Ok(completion.content)
}
