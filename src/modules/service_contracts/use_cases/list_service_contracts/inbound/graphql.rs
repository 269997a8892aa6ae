use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::service_contracts::use_cases::list_service_contracts::projection::ServiceContractView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlServiceContract {
    pub contract_id: String,
    pub client_id: String,
    pub title: String,
    pub service_frequency: String,
    pub frequency_value: u32,
    pub last_service_date: Option<i64>,
    pub next_service_date: Option<i64>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl From<ServiceContractView> for GqlServiceContract {
    fn from(v: ServiceContractView) -> Self {
        Self {
            contract_id: v.contract_id,
            client_id: v.client_id,
            title: v.title,
            service_frequency: v.service_frequency.to_string(),
            frequency_value: v.frequency_value,
            last_service_date: v.last_service_date,
            next_service_date: v.next_service_date,
            created_at: v.created_at,
            created_by: v.created_by,
            updated_at: v.updated_at,
            updated_by: v.updated_by,
        }
    }
}

#[derive(Default)]
pub struct ServiceContractsQuery;

#[Object]
impl ServiceContractsQuery {
    async fn service_contract(
        &self,
        context: &Context<'_>,
        contract_id: String,
    ) -> GqlResult<Option<GqlServiceContract>> {
        let state = context.data_unchecked::<AppState>();
        let contract = state.contract_queries.get_by_contract_id(&contract_id).await?;
        Ok(contract.map(Into::into))
    }

    async fn service_contracts_by_client_id(
        &self,
        context: &Context<'_>,
        client_id: String,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlServiceContract>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .contract_queries
            .list_by_client_id(
                &client_id,
                offset.unwrap_or(0).max(0) as u64,
                limit.unwrap_or(20).max(0) as u64,
                sort_desc.unwrap_or(false),
            )
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
