// Shared test fixtures for the service contract events.

use crate::modules::service_contracts::core::events::v1::service_contract_created::ServiceContractCreatedV1;
use crate::modules::service_contracts::core::events::v1::service_visit_recorded::ServiceVisitRecordedV1;
use crate::tests::fixtures::commands::create_service_contract::CreateServiceContractBuilder;

/// Builder function returning a canonical event instance for tests.
pub fn make_service_contract_created_v1_event() -> ServiceContractCreatedV1 {
    let command = CreateServiceContractBuilder::new().build();
    ServiceContractCreatedV1 {
        contract_id: command.contract_id,
        client_id: command.client_id,
        title: command.title,
        service_frequency: command.service_frequency,
        frequency_value: command.frequency_value,
        created_at: command.created_at,
        created_by: command.created_by,
    }
}

pub fn make_service_visit_recorded_v1_event(
    appointment_id: &str,
    last_service_date: i64,
    next_service_date: i64,
) -> ServiceVisitRecordedV1 {
    ServiceVisitRecordedV1 {
        contract_id: "sc-fixed-0001".to_string(),
        appointment_id: appointment_id.to_string(),
        last_service_date,
        next_service_date,
        recorded_at: 1_700_000_500_000,
        recorded_by: "tech-fixed-0001".to_string(),
    }
}
