use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::appointments::core::events::appointment_stream_id;
use crate::modules::appointments::core::status::AppointmentStatus;
use crate::modules::appointments::use_cases::change_appointment_status::command::ChangeAppointmentStatus;
use crate::modules::appointments::use_cases::change_appointment_status::decision::DecideError;
use crate::modules::appointments::use_cases::change_appointment_status::handler::{
    ApplicationError, StatusChanged,
};
use crate::modules::service_contracts::use_cases::record_service_visit::decision::SkipReason;
use crate::modules::service_contracts::use_cases::record_service_visit::handler::RecordOutcome;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ChangeAppointmentStatusBody {
    pub status: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceVisitResponse {
    Recorded { next_service_date: i64 },
    Skipped { reason: SkipReason },
    NotLinked,
}

#[derive(Serialize)]
pub struct ChangeAppointmentStatusResponse {
    pub appointment_id: String,
    pub status: AppointmentStatus,
    pub service_visit: ServiceVisitResponse,
}

impl From<Option<RecordOutcome>> for ServiceVisitResponse {
    fn from(outcome: Option<RecordOutcome>) -> Self {
        match outcome {
            Some(RecordOutcome::Recorded {
                next_service_date, ..
            }) => Self::Recorded { next_service_date },
            Some(RecordOutcome::Skipped { reason }) => Self::Skipped { reason },
            None => Self::NotLinked,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    body: Result<Json<ChangeAppointmentStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let status = match body.status.parse::<AppointmentStatus>() {
        Ok(status) => status,
        Err(e) => return unprocessable(e),
    };

    let stream_id = appointment_stream_id(&appointment_id);
    let command = ChangeAppointmentStatus {
        appointment_id: appointment_id.clone(),
        status,
        changed_at: Utc::now().timestamp_millis(),
        changed_by: "user-from-auth".into(),
    };

    match state.change_status_handler.handle(&stream_id, command).await {
        Ok(StatusChanged {
            status,
            service_visit,
        }) => {
            if let Some(RecordOutcome::Recorded {
                stream_id: contract_stream,
                ..
            }) = &service_visit
            {
                if let Err(e) = state.project_contract_stream(contract_stream).await {
                    tracing::error!(stream_id = %contract_stream, error = %e, "inline projection failed");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            }
            Json(ChangeAppointmentStatusResponse {
                appointment_id,
                status,
                service_visit: service_visit.into(),
            })
            .into_response()
        }
        Err(ApplicationError::Domain(DecideError::NotFound)) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(ApplicationError::Domain(reason @ DecideError::InvalidTransition { .. })) => {
            (
                StatusCode::CONFLICT,
                Json(serde_json::json!({ "error": reason.to_string() })),
            )
                .into_response()
        }
        Err(ApplicationError::ServiceVisit(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "appointment_id": appointment_id,
                "status": status,
                "error": format!("status changed but service visit not recorded: {e}"),
            })),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
