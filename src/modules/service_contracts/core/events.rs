pub mod v1 {
    pub mod service_contract_created;
    pub mod service_visit_recorded;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ServiceContractEvent {
    ServiceContractCreatedV1(v1::service_contract_created::ServiceContractCreatedV1),
    ServiceVisitRecordedV1(v1::service_visit_recorded::ServiceVisitRecordedV1),
}

pub fn contract_stream_id(contract_id: &str) -> String {
    format!("ServiceContract-{contract_id}")
}
