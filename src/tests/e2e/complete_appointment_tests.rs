use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

// 2024-01-31T00:00:00Z
const JAN_31_2024: i64 = 1_706_659_200_000;
// 2024-02-29T00:00:00Z
const FEB_29_2024: i64 = 1_709_164_800_000;
const TWO_HOURS: i64 = 7_200_000;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();
    let response: Response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_contract(app: &Router, frequency: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/service-contracts",
        Some(json!({
            "client_id": "client-e2e",
            "title": "Lawn care",
            "service_frequency": frequency,
            "frequency_value": 1,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["contract_id"].as_str().unwrap().to_string()
}

async fn schedule(app: &Router, contract_id: &str, start_date: i64) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/appointments",
        Some(json!({
            "client_id": "client-e2e",
            "contract_id": contract_id,
            "start_date": start_date,
            "end_date": start_date + TWO_HOURS,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["appointment_id"].as_str().unwrap().to_string()
}

async fn change_status(app: &Router, appointment_id: &str, status: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/appointments/{appointment_id}/status"),
        Some(json!({ "status": status })),
    )
    .await
}

#[tokio::test]
async fn completing_a_month_end_visit_clamps_the_next_service_date() {
    let app = router(make_test_state());
    let contract_id = create_contract(&app, "MONTHLY").await;
    let appointment_id = schedule(&app, &contract_id, JAN_31_2024).await;

    let (status, body) = change_status(&app, &appointment_id, "IN_PROGRESS").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service_visit"]["kind"], "not_linked");

    let (status, body) = change_status(&app, &appointment_id, "COMPLETED").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "COMPLETED");
    assert_eq!(body["service_visit"]["kind"], "recorded");
    assert_eq!(body["service_visit"]["next_service_date"], FEB_29_2024);

    let (status, contract) = send(&app, "GET", &format!("/service-contracts/{contract_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contract["last_service_date"], JAN_31_2024);
    assert_eq!(contract["next_service_date"], FEB_29_2024);
}

#[tokio::test]
async fn completing_twice_is_rejected_and_records_once() {
    let app = router(make_test_state());
    let contract_id = create_contract(&app, "MONTHLY").await;
    let appointment_id = schedule(&app, &contract_id, JAN_31_2024).await;

    let (status, _) = change_status(&app, &appointment_id, "COMPLETED").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = change_status(&app, &appointment_id, "COMPLETED").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, contract) = send(&app, "GET", &format!("/service-contracts/{contract_id}"), None).await;
    assert_eq!(contract["next_service_date"], FEB_29_2024);
}

#[tokio::test]
async fn completing_a_one_time_visit_leaves_the_contract_without_a_next_date() {
    let app = router(make_test_state());
    let contract_id = create_contract(&app, "ONE_TIME").await;
    let appointment_id = schedule(&app, &contract_id, JAN_31_2024).await;

    let (status, body) = change_status(&app, &appointment_id, "COMPLETED").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service_visit"]["kind"], "skipped");
    assert_eq!(body["service_visit"]["reason"], "no_recurrence");

    let (_, contract) = send(&app, "GET", &format!("/service-contracts/{contract_id}"), None).await;
    assert!(contract["last_service_date"].is_null());
    assert!(contract["next_service_date"].is_null());
}

#[tokio::test]
async fn a_cancelled_visit_does_not_move_the_next_service_date() {
    let app = router(make_test_state());
    let contract_id = create_contract(&app, "WEEKLY").await;
    let appointment_id = schedule(&app, &contract_id, JAN_31_2024).await;

    let (status, _) = change_status(&app, &appointment_id, "CANCELLED").await;
    assert_eq!(status, StatusCode::OK);

    let (_, contract) = send(&app, "GET", &format!("/service-contracts/{contract_id}"), None).await;
    assert!(contract["next_service_date"].is_null());
}

#[tokio::test]
async fn previews_the_next_service_date_without_a_contract() {
    let app = router(make_test_state());
    let (status, body) = send(
        &app,
        "GET",
        &format!("/next-service-date?base_date={JAN_31_2024}&frequency=MONTHLY&value=1"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "recurs");
    assert_eq!(body["next_service_date"], FEB_29_2024);
}
