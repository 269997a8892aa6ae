use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::appointments::core::events::appointment_stream_id;
use crate::modules::appointments::use_cases::schedule_appointment::command::ScheduleAppointment;
use crate::modules::appointments::use_cases::schedule_appointment::handler::ApplicationError;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ScheduleAppointmentBody {
    pub client_id: String,
    pub contract_id: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
}

#[derive(Serialize)]
pub struct ScheduleAppointmentResponse {
    pub appointment_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ScheduleAppointmentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    if let Some(contract_id) = &body.contract_id {
        match state.contract_queries.get_by_contract_id(contract_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return unprocessable(format!("unknown service contract: {contract_id}")),
            Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }

    let appointment_id = Uuid::now_v7().to_string();
    let stream_id = appointment_stream_id(&appointment_id);

    let command = ScheduleAppointment {
        appointment_id: appointment_id.clone(),
        client_id: body.client_id,
        contract_id: body.contract_id,
        start_date: body.start_date,
        end_date: body.end_date,
        created_at: Utc::now().timestamp_millis(),
        created_by: "user-from-auth".into(),
    };

    match state
        .schedule_appointment_handler
        .handle(&stream_id, command)
        .await
    {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ScheduleAppointmentResponse { appointment_id }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
