use crate::modules::service_contracts::core::events::v1::service_contract_created::ServiceContractCreatedV1;
use crate::modules::service_contracts::core::events::v1::service_visit_recorded::ServiceVisitRecordedV1;

/// Publications requested by an accepted decision, enqueued after its events are appended.
pub enum ServiceContractIntent {
    PublishServiceContractCreated { payload: ServiceContractCreatedV1 },
    PublishServiceVisitRecorded { payload: ServiceVisitRecordedV1 },
}
