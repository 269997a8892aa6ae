use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::core::state::ServiceContractState;

pub fn evolve(state: ServiceContractState, event: ServiceContractEvent) -> ServiceContractState {
    match (state, event) {
        (ServiceContractState::None, ServiceContractEvent::ServiceContractCreatedV1(e)) => {
            ServiceContractState::Active {
                contract_id: e.contract_id,
                client_id: e.client_id,
                title: e.title,
                service_frequency: e.service_frequency,
                frequency_value: e.frequency_value,
                last_service_date: None,
                next_service_date: None,
                last_appointment_id: None,
                created_at: e.created_at,
                created_by: e.created_by.clone(),
                updated_at: e.created_at,
                updated_by: e.created_by,
            }
        }
        (
            ServiceContractState::Active {
                contract_id,
                client_id,
                title,
                service_frequency,
                frequency_value,
                created_at,
                created_by,
                ..
            },
            ServiceContractEvent::ServiceVisitRecordedV1(e),
        ) => ServiceContractState::Active {
            contract_id,
            client_id,
            title,
            service_frequency,
            frequency_value,
            last_service_date: Some(e.last_service_date),
            next_service_date: Some(e.next_service_date),
            last_appointment_id: Some(e.appointment_id),
            created_at,
            created_by,
            updated_at: e.recorded_at,
            updated_by: e.recorded_by,
        },
        (state, _) => state,
    }
}
