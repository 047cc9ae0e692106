use std::sync::Arc;
use std::time::Instant;

use async_openai::error::OpenAIError;
use opentelemetry::KeyValue;
use tracing::{Instrument, Span};

use super::{ChatCompletion, ChatRequest, Provider};
use crate::telemetry::metrics::{
    GEN_AI_ERROR_COUNT, GEN_AI_OPERATION_DURATION, GEN_AI_TOKEN_USAGE,
};

const PROVIDER_NAME: &str = "openai";

/// Instrumented wrapper around one chat backend. Each call is a single
/// attempt.
pub struct LlmClient {
    provider: Arc<dyn Provider>,
}

impl LlmClient {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    pub async fn chat(&self, req: &ChatRequest) -> anyhow::Result<ChatCompletion> {
        let span = tracing::info_span!(
            "gen_ai.chat",
            otel.name = %format!("chat {}", req.model),
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = PROVIDER_NAME,
            gen_ai.request.model = %req.model,
            gen_ai.response.model = tracing::field::Empty,
            gen_ai.usage.input_tokens = tracing::field::Empty,
            gen_ai.usage.output_tokens = tracing::field::Empty,
            gen_ai.response.finish_reasons = tracing::field::Empty,
            otel.status_code = tracing::field::Empty,
            error.type = tracing::field::Empty,
        );

        let start = Instant::now();
        let result = self.provider.complete(req).instrument(span.clone()).await;
        let attrs = [
            KeyValue::new("gen_ai.operation.name", "chat"),
            KeyValue::new("gen_ai.provider.name", PROVIDER_NAME),
            KeyValue::new("gen_ai.request.model", req.model.clone()),
        ];

        match &result {
            Ok(completion) => {
                record_usage(&span, completion, &attrs);
                GEN_AI_OPERATION_DURATION.record(start.elapsed().as_secs_f64(), &attrs);
            }
            Err(err) => {
                let error_type = error_type(err);
                span.record("otel.status_code", "ERROR");
                span.record("error.type", error_type);

                let mut attrs = attrs.to_vec();
                attrs.push(KeyValue::new("error.type", error_type));
                GEN_AI_ERROR_COUNT.add(1, &attrs);
            }
        }

        result
    }
}

fn record_usage(span: &Span, completion: &ChatCompletion, attrs: &[KeyValue]) {
    span.record("gen_ai.response.model", completion.model.as_str());
    span.record("gen_ai.usage.input_tokens", i64::from(completion.input_tokens));
    span.record("gen_ai.usage.output_tokens", i64::from(completion.output_tokens));
    if let Some(reason) = &completion.finish_reason {
        span.record("gen_ai.response.finish_reasons", reason.as_str());
    }

    for (token_type, count) in [
        ("input", completion.input_tokens),
        ("output", completion.output_tokens),
    ] {
        let mut token_attrs = attrs.to_vec();
        token_attrs.push(KeyValue::new("gen_ai.token.type", token_type));
        GEN_AI_TOKEN_USAGE.record(f64::from(count), &token_attrs);
    }
}

/// Low-cardinality `error.type` for the span and error counter.
pub(crate) fn error_type(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<OpenAIError>() {
        Some(OpenAIError::ApiError(_)) => "api_error",
        Some(OpenAIError::JSONDeserialize(..)) => "invalid_response",
        Some(OpenAIError::InvalidArgument(_)) => "invalid_request",
        _ => "_OTHER",
    }
}
