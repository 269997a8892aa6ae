use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::fmt::Display;

use crate::modules::appointments::use_cases::change_appointment_status::inbound::http as change_status_http;
use crate::modules::appointments::use_cases::schedule_appointment::inbound::http as schedule_http;
use crate::modules::service_contracts::use_cases::create_service_contract::inbound::http as create_http;
use crate::modules::service_contracts::use_cases::list_service_contracts::inbound::http as list_http;
use crate::modules::service_contracts::use_cases::preview_next_service_date::inbound::http as preview_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/service-contracts",
            post(create_http::handle).get(list_http::list),
        )
        .route("/service-contracts/{contract_id}", get(list_http::get))
        .route("/appointments", post(schedule_http::handle))
        .route(
            "/appointments/{appointment_id}/status",
            post(change_status_http::handle),
        )
        .route("/next-service-date", get(preview_http::handle))
        .with_state(state)
}

/// 422 with a JSON `{"error": ...}` body.
pub fn unprocessable(error: impl Display) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "error": error.to_string() })),
    )
        .into_response()
}
