use crate::modules::appointments::core::events::AppointmentEvent;
use crate::modules::appointments::core::evolve::evolve;
use crate::modules::appointments::core::state::AppointmentState;
use crate::modules::appointments::core::status::AppointmentStatus;
use crate::modules::appointments::use_cases::change_appointment_status::command::ChangeAppointmentStatus;
use crate::modules::appointments::use_cases::change_appointment_status::decide::decide_change_status;
use crate::modules::appointments::use_cases::change_appointment_status::decision::{
    DecideError, Decision,
};
use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::use_cases::record_service_visit::command::RecordServiceVisit;
use crate::modules::service_contracts::use_cases::record_service_visit::handler::{
    self as record_visit, RecordOutcome, RecordServiceVisitHandler,
};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error("service visit not recorded: {0}")]
    ServiceVisit(#[from] record_visit::ApplicationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChanged {
    pub status: AppointmentStatus,
    /// `None` unless the appointment was completed against a contract.
    pub service_visit: Option<RecordOutcome>,
}

pub struct ChangeAppointmentStatusHandler<TEventStore, TContractStore, TOutbox>
where
    TEventStore: EventStore<AppointmentEvent> + Send + Sync + 'static,
    TContractStore: EventStore<ServiceContractEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    record_visit: Arc<RecordServiceVisitHandler<TContractStore, TOutbox>>,
}

impl<TEventStore, TContractStore, TOutbox>
    ChangeAppointmentStatusHandler<TEventStore, TContractStore, TOutbox>
where
    TEventStore: EventStore<AppointmentEvent> + Send + Sync + 'static,
    TContractStore: EventStore<ServiceContractEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        record_visit: Arc<RecordServiceVisitHandler<TContractStore, TOutbox>>,
    ) -> Self {
        Self {
            event_store,
            record_visit,
        }
    }

    /// The status change is appended before the contract is touched; a failure to record the
    /// visit surfaces as `ServiceVisit` with the appointment already completed.
    pub async fn handle(
        &self,
        stream_id: &str,
        command: ChangeAppointmentStatus,
    ) -> Result<StatusChanged, ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(AppointmentState::None, evolve);

        let status = command.status;
        let recorded_at = command.changed_at;
        let recorded_by = command.changed_by.clone();

        match decide_change_status(&state, command) {
            Decision::Accepted {
                events,
                completed_visit,
            } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                tracing::info!(stream_id, %status, "appointment status changed");

                let Some(visit) = completed_visit else {
                    return Ok(StatusChanged {
                        status,
                        service_visit: None,
                    });
                };
                let outcome = self
                    .record_visit
                    .handle(RecordServiceVisit {
                        contract_id: visit.contract_id,
                        appointment_id: visit.appointment_id,
                        base_date: visit.start_date,
                        recorded_at,
                        recorded_by,
                    })
                    .await
                    .inspect_err(|e| {
                        tracing::error!(stream_id, error = %e, "completed appointment left contract unchanged")
                    })?;
                Ok(StatusChanged {
                    status,
                    service_visit: Some(outcome),
                })
            }
            Decision::Rejected { reason } => {
                tracing::warn!(stream_id, %reason, "appointment status change rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
