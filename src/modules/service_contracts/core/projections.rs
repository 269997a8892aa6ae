use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::use_cases::list_service_contracts::projection::ServiceContractRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(ServiceContractRow),
    PatchServiceDates {
        contract_id: String,
        last_service_date: i64,
        next_service_date: i64,
        updated_at: i64,
        updated_by: String,
        last_event_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &ServiceContractEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        ServiceContractEvent::ServiceContractCreatedV1(details) => {
            vec![Mutation::Upsert(ServiceContractRow {
                contract_id: details.contract_id.clone(),
                client_id: details.client_id.clone(),
                title: details.title.clone(),
                service_frequency: details.service_frequency,
                frequency_value: details.frequency_value.get(),
                last_service_date: None,
                next_service_date: None,
                created_at: details.created_at,
                created_by: details.created_by.clone(),
                updated_at: details.created_at,
                updated_by: details.created_by.clone(),
                last_event_id: Some(stream_key),
            })]
        }
        ServiceContractEvent::ServiceVisitRecordedV1(details) => vec![Mutation::PatchServiceDates {
            contract_id: details.contract_id.clone(),
            last_service_date: details.last_service_date,
            next_service_date: details.next_service_date,
            updated_at: details.recorded_at,
            updated_by: details.recorded_by.clone(),
            last_event_id: stream_key,
        }],
    }
}
