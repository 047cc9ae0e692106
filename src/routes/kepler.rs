use axum::{
    Json,
    extract::{Path, State},
};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::report::{SystemReport, generate_system_report};

pub async fn get_kepler_data(
    State(state): State<AppState>,
    Path(kepid): Path<String>,
) -> AppResult<Json<SystemReport>> {
    let kepid = parse_kepid(&kepid)?;

    let report = generate_system_report(
        &state.archive,
        &state.llm_client,
        &state.config.summary_model,
        state.config.summary_timeout,
        kepid,
    )
    .await?;

    Ok(Json(report))
}

fn parse_kepid(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("kepid must be an integer, got {raw:?}")))
}
