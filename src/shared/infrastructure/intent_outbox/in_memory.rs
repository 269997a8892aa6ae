// In memory implementation of the DomainOutbox port.
//
// Purpose
// - Capture published intents in tests and local runs.
//
// Responsibilities
// - Append outbox rows in enqueue order.
// - Refuse a second row for the same stream id and stream version.
// - Simulate an outage through the offline toggle.

use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Rows are keyed by `(stream_id, stream_version)`; a second row for the same key is rejected.
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn rows_for_topic(&self, topic: &str) -> Vec<OutboxRow> {
        self.rows
            .lock()
            .await
            .iter()
            .filter(|row| row.topic == topic)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}
