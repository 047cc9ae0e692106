pub mod health;
pub mod kepler;
pub mod root;

use axum::{Router, http::HeaderName, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::AppState;
use crate::telemetry::{HttpMakeSpan, HttpOnResponse, X_REQUEST_ID};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/kepler/{kepid}", get(kepler::get_kepler_data))
        .route("/api/health", get(health::health))
        .with_state(state)
}

/// The router as served: request ids, tracing and CORS.
pub fn create_app(state: AppState) -> Router {
    let request_id = HeaderName::from_static(X_REQUEST_ID);

    create_router(state)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(HttpMakeSpan)
                .on_response(HttpOnResponse),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
