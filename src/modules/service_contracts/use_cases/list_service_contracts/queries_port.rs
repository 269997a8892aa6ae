use crate::modules::service_contracts::use_cases::list_service_contracts::projection::ServiceContractView;
use async_trait::async_trait;

#[async_trait]
pub trait ServiceContractQueries {
    async fn get_by_contract_id(
        &self,
        contract_id: &str,
    ) -> anyhow::Result<Option<ServiceContractView>>;

    /// Contracts without a next service date sort after every scheduled one.
    async fn list_by_client_id(
        &self,
        client_id: &str,
        offset: u64,
        limit: u64,
        sort_by_next_service_desc: bool,
    ) -> anyhow::Result<Vec<ServiceContractView>>;
}
