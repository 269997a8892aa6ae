use crate::modules::service_contracts::core::intents::ServiceContractIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate domain intents into outbox rows and enqueue them.
/// `starting_version` is the stream version before the append; intent `i` maps to
/// stream version `starting_version + i + 1`.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<ServiceContractIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let (event_type, occurred_at, payload) = match intent {
            ServiceContractIntent::PublishServiceContractCreated { payload } => (
                "ServiceContractCreated",
                payload.created_at,
                serde_json::to_value(payload)?,
            ),
            ServiceContractIntent::PublishServiceVisitRecorded { payload } => (
                "ServiceVisitRecorded",
                payload.recorded_at,
                serde_json::to_value(payload)?,
            ),
        };
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}
