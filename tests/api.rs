mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use std::time::Duration;

use kepler_data_api::report::SUMMARY_FALLBACK;
use kepler_data_api::routes::{create_app, create_router};

async fn get_json(state: kepler_data_api::AppState, uri: &str) -> (StatusCode, Value) {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn tce(plnt_num: u32, period: f64) -> Value {
    json!({
        "kepid": 4276002,
        "tce_plnt_num": plnt_num,
        "tce_period": period,
        "tce_prad": 2.1,
        "tce_eqt": 780.0,
        "tce_insol": 60.2,
        "tce_duration": 3.2,
        "tce_depth": 410.0,
        "tce_model_snr": 18.6,
        "tce_impact": 0.42,
        "tce_steff": 5778.0,
        "tce_sradius": 1.02,
        "tce_smass": 1.01,
        "tce_sage": 4.6,
        "ra": 290.12347,
        "dec": 44.5,
        "tce_time0bk": 134.75
    })
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let state = common::app_state("http://127.0.0.1:9/TAP/sync", Some("unused"));
    let (status, body) = get_json(state, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Welcome to the Kepler Data API"}));
}

#[tokio::test]
async fn health_reports_ok() {
    let state = common::app_state("http://127.0.0.1:9/TAP/sync", None);
    let (status, body) = get_json(state, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "kepler-data-api");
}

#[tokio::test]
async fn kepler_report_with_summary() {
    let archive = common::spawn_archive(
        StatusCode::OK,
        json!([tce(1, 0.84), tce(2, 12.0), tce(3, 45.3)]),
    )
    .await;
    let state = common::app_state(&archive, Some("Kepler-4276002 hosts three candidates."));

    let (status, body) = get_json(state, "/kepler/4276002").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["star_system"], "Kepler-4276002");
    assert_eq!(body["number_of_planets"], 3);
    assert_eq!(body["potential_planets"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["star_temperature"],
        "5,778 Kelvin (Earth's Sun is about 5,800 Kelvin)"
    );
    assert_eq!(body["star_mass"], "1.01 times the mass of Earth's Sun");
    assert_eq!(body["ra_dec"], "RA: 290.1235, Dec: 44.5000");
    assert_eq!(body["discovery_date"], "Day 134");
    assert_eq!(body["last_update"], "Data from Q1-Q17 DR25 TCE catalog");
    assert_eq!(body["smart_summary"], "Kepler-4276002 hosts three candidates.");
    assert!(body.get("system_note").is_none());

    let first = &body["potential_planets"][0];
    assert_eq!(first["planet_number"], 1);
    assert_eq!(first["orbit"], "Circles its star every 0.84 days");
    assert_eq!(first["detection_snr"], 18.6);
    assert_eq!(first["impact_parameter"], 0.42);
    assert_eq!(
        first["interesting_features"],
        json!(["This planet orbits very quickly!"])
    );
    assert_eq!(body["potential_planets"][1]["interesting_features"], json!([]));
}

#[tokio::test]
async fn kepler_report_survives_llm_failure() {
    let archive = common::spawn_archive(StatusCode::OK, json!([tce(1, 5.0)])).await;
    let state = common::app_state(&archive, None);

    let (status, body) = get_json(state, "/kepler/4276002").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["smart_summary"], SUMMARY_FALLBACK);
    assert_eq!(body["number_of_planets"], 1);
}

#[tokio::test]
async fn kepler_report_crowded_system_note() {
    let rows: Vec<Value> = (1..=6).map(|n| tce(n, 10.0 * n as f64)).collect();
    let archive = common::spawn_archive(StatusCode::OK, Value::Array(rows)).await;
    let state = common::app_state(&archive, Some("Six candidates."));

    let (status, body) = get_json(state, "/kepler/8311864").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number_of_planets"], 6);
    assert_eq!(
        body["system_note"],
        "This star has an unusually high number of potential planets!"
    );
}

#[tokio::test]
async fn archive_error_status_propagates() {
    for upstream in [StatusCode::NOT_FOUND, StatusCode::SERVICE_UNAVAILABLE] {
        let archive = common::spawn_archive(upstream, json!({"message": "down"})).await;
        let state = common::app_state(&archive, Some("unused"));

        let (status, body) = get_json(state, "/kepler/1").await;

        assert_eq!(status, upstream);
        assert_eq!(body["detail"], "Failed to retrieve data from NASA");
        assert_eq!(body["status"], upstream.as_u16());
    }
}

#[tokio::test]
async fn empty_archive_result_is_not_found() {
    let archive = common::spawn_archive(StatusCode::OK, json!([])).await;
    let state = common::app_state(&archive, Some("unused"));

    let (status, body) = get_json(state, "/kepler/123").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No data found for KepID 123");
}

#[tokio::test]
async fn non_integer_kepid_is_rejected() {
    let state = common::app_state("http://127.0.0.1:9/TAP/sync", Some("unused"));

    let (status, body) = get_json(state, "/kepler/kepler-10").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("kepid must be an integer"));
}

#[tokio::test]
async fn slow_summary_is_delivered_by_served_app() {
    let archive = common::spawn_archive(StatusCode::OK, json!([tce(1, 5.0)])).await;
    let state = common::slow_app_state(
        common::config(&archive),
        Some("Kepler-4276002 took its time."),
        Duration::from_millis(300),
    );

    let response = create_app(state)
        .oneshot(
            Request::builder()
                .uri("/kepler/4276002")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["smart_summary"], "Kepler-4276002 took its time.");
}

#[tokio::test]
async fn summary_past_timeout_falls_back_with_ok_status() {
    let archive = common::spawn_archive(StatusCode::OK, json!([tce(1, 5.0)])).await;
    let mut config = common::config(&archive);
    config.summary_timeout = Duration::from_millis(50);
    let state = common::slow_app_state(config, Some("never seen"), Duration::from_secs(30));

    let response = create_app(state)
        .oneshot(
            Request::builder()
                .uri("/kepler/4276002")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["smart_summary"], SUMMARY_FALLBACK);
    assert_eq!(body["number_of_planets"], 1);
}
