use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::service_contracts::core::events::contract_stream_id;
use crate::modules::service_contracts::core::frequency::{FrequencyValue, ServiceFrequency};
use crate::modules::service_contracts::use_cases::create_service_contract::command::CreateServiceContract;
use crate::modules::service_contracts::use_cases::create_service_contract::handler::ApplicationError;
use crate::shell::http::unprocessable;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateServiceContractBody {
    pub client_id: String,
    pub title: String,
    pub service_frequency: String,
    pub frequency_value: i64,
}

#[derive(Serialize)]
pub struct CreateServiceContractResponse {
    pub contract_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateServiceContractBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let service_frequency = match body.service_frequency.parse::<ServiceFrequency>() {
        Ok(frequency) => frequency,
        Err(e) => return unprocessable(e),
    };
    let frequency_value = match FrequencyValue::try_from(body.frequency_value) {
        Ok(value) => value,
        Err(e) => return unprocessable(e),
    };

    let contract_id = Uuid::now_v7().to_string();
    let stream_id = contract_stream_id(&contract_id);

    let command = CreateServiceContract {
        contract_id: contract_id.clone(),
        client_id: body.client_id,
        title: body.title,
        service_frequency,
        frequency_value,
        created_at: Utc::now().timestamp_millis(),
        created_by: "user-from-auth".into(),
    };

    match state.create_contract_handler.handle(&stream_id, command).await {
        Ok(()) => {
            if let Err(e) = state.project_contract_stream(&stream_id).await {
                tracing::error!(stream_id, error = %e, "inline projection failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
            (
                StatusCode::CREATED,
                Json(CreateServiceContractResponse { contract_id }),
            )
                .into_response()
        }
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
