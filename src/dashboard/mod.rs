//! Browser front-end for the API: a server-rendered form that looks up a
//! KepID through the HTTP API and renders the report.

pub mod client;
pub mod render;

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;

pub use client::{API_TIMEOUT, ApiClient, DashboardError};
pub use render::Lookup;

#[derive(Clone)]
pub struct DashboardState {
    pub api: ApiClient,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub kepid: Option<String>,
}

pub fn create_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(state)
}

#[tracing::instrument(name = "dashboard lookup", skip(state), fields(lookup.outcome))]
pub async fn index(
    State(state): State<DashboardState>,
    Query(query): Query<LookupQuery>,
) -> Html<String> {
    let raw = query.kepid.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let lookup = match raw {
        None => Lookup::Idle,
        Some(raw) => match parse_positive_kepid(raw) {
            None => Lookup::Invalid,
            Some(kepid) => match state.api.fetch_report(kepid).await {
                Ok(report) => Lookup::Report(Box::new(report)),
                Err(e) => {
                    tracing::warn!(kepid, error = %e, "Dashboard lookup failed");
                    Lookup::Failed(e)
                }
            },
        },
    };

    tracing::Span::current().record("lookup.outcome", lookup.outcome());

    Html(render::page(raw, &lookup))
}

/// Only positive whole numbers are sent to the API.
pub fn parse_positive_kepid(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|&id| id >= 1)
}
