use crate::modules::service_contracts::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::core::evolve::evolve;
use crate::modules::service_contracts::core::state::ServiceContractState;
use crate::modules::service_contracts::use_cases::create_service_contract::command::CreateServiceContract;
use crate::modules::service_contracts::use_cases::create_service_contract::decide::decide_create;
use crate::modules::service_contracts::use_cases::create_service_contract::decision::Decision;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("domain rejected: {0}")]
    Domain(String),
}

pub struct CreateServiceContractHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ServiceContractEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> CreateServiceContractHandler<TEventStore, TOutbox>
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

    pub async fn handle(
        &self,
        stream_id: &str,
        command: CreateServiceContract,
    ) -> Result<(), ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(ServiceContractState::None, evolve);

        match decide_create(&state, command) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                dispatch_intents(
                    &*self.outbox,
                    stream_id,
                    stream.version,
                    &self.topic,
                    intents,
                )
                .await?;
                tracing::info!(stream_id, "service contract created");
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::warn!(stream_id, %reason, "service contract creation rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
