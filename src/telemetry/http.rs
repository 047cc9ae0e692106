use std::time::Duration;

use axum::http::{Request, Response};
use opentelemetry::KeyValue;
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Span;

use super::metrics::{HTTP_REQUEST_DURATION, HTTP_REQUESTS_TOTAL};

pub const X_REQUEST_ID: &str = "x-request-id";

#[derive(Clone)]
pub struct HttpMakeSpan;

impl<B> MakeSpan<B> for HttpMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let method = request.method().as_str();
        let uri = request.uri();
        let path = uri.path();

        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "HTTP request",
            otel.name = %format!("{} {}", method, path),
            http.method = %method,
            http.route = %path,
            http.target = %uri,
            http.scheme = "http",
            http.flavor = ?request.version(),
            http.user_agent = request.headers()
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                .unwrap_or(""),
            http.request_id = %request_id,
            http.response.status_code = tracing::field::Empty,
            otel.status_code = tracing::field::Empty,
        )
    }
}

#[derive(Clone)]
pub struct HttpOnResponse;

impl<B> OnResponse<B> for HttpOnResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status().as_u16();
        let latency_ms = latency.as_secs_f64() * 1000.0;

        span.record("http.response.status_code", i64::from(status));
        span.record("otel.status_code", otel_status(status));

        let attrs = status_attrs(status);
        HTTP_REQUESTS_TOTAL.add(1, &attrs);
        HTTP_REQUEST_DURATION.record(latency_ms, &attrs);

        tracing::info!(
            http.response.status_code = status,
            latency_ms,
            "finished processing request"
        );
    }
}

/// Only server errors mark the span as failed.
fn otel_status(status: u16) -> &'static str {
    if status >= 500 { "ERROR" } else { "OK" }
}

fn status_attrs(status: u16) -> [KeyValue; 2] {
    [
        KeyValue::new("http.status_code", status.to_string()),
        KeyValue::new("http.status_class", format!("{}xx", status / 100)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otel_status() {
        assert_eq!(otel_status(200), "OK");
        assert_eq!(otel_status(404), "OK");
        assert_eq!(otel_status(502), "ERROR");
    }

    #[test]
    fn test_status_attrs() {
        let attrs = status_attrs(404);
        assert_eq!(attrs[0].value.as_str(), "404");
        assert_eq!(attrs[1].value.as_str(), "4xx");
    }
}
