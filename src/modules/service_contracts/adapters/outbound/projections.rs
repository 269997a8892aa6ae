use crate::modules::service_contracts::use_cases::list_service_contracts::projection::ServiceContractRow;
use async_trait::async_trait;

#[async_trait]
pub trait ServiceContractProjectionRepository: Send + Sync {
    async fn upsert(&self, row: ServiceContractRow) -> anyhow::Result<()>;

    async fn patch_service_dates(
        &self,
        contract_id: &str,
        last_service_date: i64,
        next_service_date: i64,
        updated_at: i64,
        updated_by: &str,
        last_event_id: &str,
    ) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
