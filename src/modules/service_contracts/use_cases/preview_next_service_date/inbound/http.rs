use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::service_contracts::core::next_service_date::{
    NextServiceDate, project_from_millis,
};
use crate::shared::core::primitives::millis_from_datetime;
use crate::shell::http::unprocessable;

#[derive(Deserialize)]
pub struct PreviewParams {
    pub base_date: i64,
    pub frequency: String,
    pub value: i64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextServiceDateResponse {
    Recurs { next_service_date: i64 },
    NoRecurrence,
    Unsupported { tag: String },
}

impl From<NextServiceDate> for NextServiceDateResponse {
    fn from(next: NextServiceDate) -> Self {
        match next {
            NextServiceDate::Recurs(date) => NextServiceDateResponse::Recurs {
                next_service_date: millis_from_datetime(date),
            },
            NextServiceDate::NoRecurrence => NextServiceDateResponse::NoRecurrence,
            NextServiceDate::Unsupported { tag } => NextServiceDateResponse::Unsupported { tag },
        }
    }
}

pub async fn handle(params: Result<Query<PreviewParams>, QueryRejection>) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    match project_from_millis(params.base_date, &params.frequency, params.value) {
        Ok(next) => Json(NextServiceDateResponse::from(next)).into_response(),
        Err(e) => unprocessable(e),
    }
}

#[cfg(test)]
mod preview_next_service_date_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::handle;

    async fn preview(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = Router::new()
            .route("/next-service-date", get(handle))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_clamp_january_31_to_february_29() {
        // 2024-01-31T00:00:00Z
        let (status, json) =
            preview("/next-service-date?base_date=1706659200000&frequency=MONTHLY&value=1").await;
        assert_eq!(status, StatusCode::OK);
        // 2024-02-29T00:00:00Z
        assert_eq!(
            json,
            serde_json::json!({ "kind": "recurs", "next_service_date": 1_709_164_800_000i64 })
        );
    }

    #[tokio::test]
    async fn it_should_report_no_recurrence_for_one_time() {
        let (status, json) =
            preview("/next-service-date?base_date=1706659200000&frequency=ONE_TIME&value=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "kind": "no_recurrence" }));
    }

    #[tokio::test]
    async fn it_should_report_an_unknown_frequency_as_unsupported() {
        let (status, json) =
            preview("/next-service-date?base_date=1706659200000&frequency=BOGUS&value=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "kind": "unsupported", "tag": "BOGUS" }));
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_zero_value() {
        let (status, json) =
            preview("/next-service-date?base_date=1706659200000&frequency=WEEKLY&value=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json["error"],
            "frequency value must be a positive integer, got 0"
        );
    }

    #[tokio::test]
    async fn it_should_return_400_when_params_are_missing() {
        let (status, _) = preview("/next-service-date?frequency=WEEKLY").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
