// In memory service contract read model.
//
// Purpose
// - Serve contract queries without a database.
//
// Responsibilities
// - Store projected rows keyed by contract id and patch their service dates.
// - Track projector watermarks.
// - List a client's contracts ordered by next service date, unscheduled last.

use crate::modules::service_contracts::adapters::outbound::projections::{
    ServiceContractProjectionRepository, WatermarkRepository,
};
use crate::modules::service_contracts::use_cases::list_service_contracts::projection::{
    ServiceContractRow, ServiceContractView,
};
use crate::modules::service_contracts::use_cases::list_service_contracts::queries_port::ServiceContractQueries;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, ServiceContractRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, repository: &str) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("{repository} repository offline");
        }
        Ok(())
    }
}

fn by_next_service_date(a: &ServiceContractRow, b: &ServiceContractRow, desc: bool) -> Ordering {
    match (a.next_service_date, b.next_service_date) {
        (Some(a_next), Some(b_next)) if desc => b_next.cmp(&a_next),
        (Some(a_next), Some(b_next)) => a_next.cmp(&b_next),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.contract_id.cmp(&b.contract_id))
}

#[async_trait::async_trait]
impl ServiceContractProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: ServiceContractRow) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        self.rows
            .write()
            .await
            .insert(row.contract_id.clone(), row);
        Ok(())
    }

    async fn patch_service_dates(
        &self,
        contract_id: &str,
        last_service_date: i64,
        next_service_date: i64,
        updated_at: i64,
        updated_by: &str,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(contract_id)
            .ok_or_else(|| anyhow::anyhow!("no projection row for contract {contract_id}"))?;
        row.last_service_date = Some(last_service_date);
        row.next_service_date = Some(next_service_date);
        row.updated_at = updated_at;
        row.updated_by = updated_by.to_string();
        row.last_event_id = Some(last_event_id.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ServiceContractQueries for InMemoryProjections {
    async fn get_by_contract_id(
        &self,
        contract_id: &str,
    ) -> anyhow::Result<Option<ServiceContractView>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .get(contract_id)
            .cloned()
            .map(ServiceContractView::from))
    }

    async fn list_by_client_id(
        &self,
        client_id: &str,
        offset: u64,
        limit: u64,
        sort_by_next_service_desc: bool,
    ) -> anyhow::Result<Vec<ServiceContractView>> {
        self.ensure_online("Projections")?;
        let guard = self.rows.read().await;

        let mut items: Vec<ServiceContractRow> = guard
            .values()
            .filter(|row| row.client_id == client_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| by_next_service_date(a, b, sort_by_next_service_desc));

        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(ServiceContractView::from)
            .collect())
    }
}
