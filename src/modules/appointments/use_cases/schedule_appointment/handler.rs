use crate::modules::appointments::core::events::AppointmentEvent;
use crate::modules::appointments::core::evolve::evolve;
use crate::modules::appointments::core::state::AppointmentState;
use crate::modules::appointments::use_cases::schedule_appointment::command::ScheduleAppointment;
use crate::modules::appointments::use_cases::schedule_appointment::decide::decide_schedule;
use crate::modules::appointments::use_cases::schedule_appointment::decision::Decision;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error("domain rejected: {0}")]
    Domain(String),
}

pub struct ScheduleAppointmentHandler<TEventStore>
where
    TEventStore: EventStore<AppointmentEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ScheduleAppointmentHandler<TEventStore>
where
    TEventStore: EventStore<AppointmentEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    pub async fn handle(
        &self,
        stream_id: &str,
        command: ScheduleAppointment,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(AppointmentState::None, evolve);

        match decide_schedule(&state, command) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                tracing::info!(stream_id, "appointment scheduled");
                Ok(())
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
