use crate::modules::service_contracts::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::service_contracts::core::events::{ServiceContractEvent, contract_stream_id};
use crate::modules::service_contracts::core::evolve::evolve;
use crate::modules::service_contracts::core::state::ServiceContractState;
use crate::modules::service_contracts::use_cases::record_service_visit::command::RecordServiceVisit;
use crate::modules::service_contracts::use_cases::record_service_visit::decide::decide_record_visit;
use crate::modules::service_contracts::use_cases::record_service_visit::decision::{
    DecideError, Decision, SkipReason,
};
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use thiserror::Error;

const MAX_APPEND_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded {
        stream_id: String,
        next_service_date: i64,
    },
    Skipped {
        reason: SkipReason,
    },
}

pub struct RecordServiceVisitHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ServiceContractEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> RecordServiceVisitHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ServiceContractEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    /// Conflicting appends reload the contract and decide again, so a visit racing another
    /// visit on the same contract is still recorded.
    pub async fn handle(
        &self,
        command: RecordServiceVisit,
    ) -> Result<RecordOutcome, ApplicationError> {
        let stream_id = contract_stream_id(&command.contract_id);
        let mut attempt = 1;
        loop {
            let stream = self.event_store.load(&stream_id).await?;
            let state = stream
                .events
                .iter()
                .cloned()
                .fold(ServiceContractState::None, evolve);

            match decide_record_visit(&state, command.clone()) {
                Decision::Accepted {
                    events,
                    intents,
                    next_service_date,
                } => {
                    match self
                        .event_store
                        .append(&stream_id, stream.version, &events)
                        .await
                    {
                        Ok(()) => {}
                        Err(EventStoreError::VersionMismatch { expected, actual })
                            if attempt < MAX_APPEND_ATTEMPTS =>
                        {
                            tracing::warn!(%stream_id, expected, actual, attempt, "service visit append conflicted, retrying");
                            attempt += 1;
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    }
                    dispatch_intents(
                        &*self.outbox,
                        &stream_id,
                        stream.version,
                        &self.topic,
                        intents,
                    )
                    .await?;
                    tracing::info!(%stream_id, next_service_date, "service visit recorded");
                    return Ok(RecordOutcome::Recorded {
                        stream_id,
                        next_service_date,
                    });
                }
                Decision::Skipped { reason } => {
                    tracing::info!(%stream_id, ?reason, "service visit not recorded");
                    return Ok(RecordOutcome::Skipped { reason });
                }
                Decision::Rejected { reason } => {
                    tracing::warn!(%stream_id, %reason, "service visit rejected");
                    return Err(ApplicationError::Domain(reason));
                }
            }
        }
    }
}
