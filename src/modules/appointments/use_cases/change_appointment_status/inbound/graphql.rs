use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::appointments::core::events::appointment_stream_id;
use crate::modules::appointments::core::status::AppointmentStatus;
use crate::modules::appointments::use_cases::change_appointment_status::command::ChangeAppointmentStatus;
use crate::modules::service_contracts::use_cases::record_service_visit::handler::RecordOutcome;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAppointmentStatusChange {
    pub appointment_id: ID,
    pub status: String,
    /// `recorded`, `skipped` or `not_linked`.
    pub service_visit: String,
    pub next_service_date: Option<i64>,
    pub skip_reason: Option<String>,
}

#[derive(Default)]
pub struct AppointmentsMutation;

#[Object]
impl AppointmentsMutation {
    async fn change_appointment_status(
        &self,
        context: &Context<'_>,
        appointment_id: ID,
        status: String,
    ) -> GqlResult<GqlAppointmentStatusChange> {
        let state = context.data_unchecked::<AppState>();
        let status = status.parse::<AppointmentStatus>()?;

        let stream_id = appointment_stream_id(&appointment_id);
        let command = ChangeAppointmentStatus {
            appointment_id: appointment_id.to_string(),
            status,
            changed_at: Utc::now().timestamp_millis(),
            changed_by: "user-from-auth".into(),
        };

        let changed = state
            .change_status_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let (service_visit, next_service_date, skip_reason) = match changed.service_visit {
            Some(RecordOutcome::Recorded {
                stream_id,
                next_service_date,
            }) => {
                state
                    .project_contract_stream(&stream_id)
                    .await
                    .map_err(|e| async_graphql::Error::new(e.to_string()))?;
                ("recorded", Some(next_service_date), None)
            }
            Some(RecordOutcome::Skipped { reason }) => {
                ("skipped", None, Some(reason.as_str().to_string()))
            }
            None => ("not_linked", None, None),
        };

        Ok(GqlAppointmentStatusChange {
            appointment_id,
            status: changed.status.to_string(),
            service_visit: service_visit.into(),
            next_service_date,
            skip_reason,
        })
    }
}
