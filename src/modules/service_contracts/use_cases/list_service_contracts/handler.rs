use crate::modules::service_contracts::adapters::outbound::projections::{
    ServiceContractProjectionRepository, WatermarkRepository,
};
use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: ServiceContractProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: ServiceContractProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &ServiceContractEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::PatchServiceDates {
                    contract_id,
                    last_service_date,
                    next_service_date,
                    updated_at,
                    updated_by,
                    last_event_id,
                } => {
                    self.repository
                        .patch_service_dates(
                            &contract_id,
                            last_service_date,
                            next_service_date,
                            updated_at,
                            &updated_by,
                            &last_event_id,
                        )
                        .await?
                }
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        tracing::debug!(projector = %self.name, stream_id, version, "applied event");
        Ok(())
    }
}
