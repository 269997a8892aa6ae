use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::service_contracts::core::events::contract_stream_id;
use crate::modules::service_contracts::core::frequency::{FrequencyValue, ServiceFrequency};
use crate::modules::service_contracts::use_cases::create_service_contract::command::CreateServiceContract;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ServiceContractsMutation;

#[Object]
impl ServiceContractsMutation {
    async fn create_service_contract(
        &self,
        context: &Context<'_>,
        client_id: String,
        title: String,
        service_frequency: String,
        frequency_value: i64,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let service_frequency = service_frequency.parse::<ServiceFrequency>()?;
        let frequency_value = FrequencyValue::try_from(frequency_value)?;

        let contract_id = Uuid::now_v7().to_string();
        let stream_id = contract_stream_id(&contract_id);
        let command = CreateServiceContract {
            contract_id: contract_id.clone(),
            client_id,
            title,
            service_frequency,
            frequency_value,
            created_at: Utc::now().timestamp_millis(),
            created_by: "user-from-auth".into(),
        };

        state
            .create_contract_handler
            .handle(&stream_id, command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        // Inline projection so queries see the new row immediately
        state
            .project_contract_stream(&stream_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(contract_id))
    }
}
