use crate::modules::service_contracts::core::frequency::{FrequencyValue, ServiceFrequency};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ServiceContractCreatedV1 {
    pub contract_id: String,
    pub client_id: String,
    pub title: String,
    pub service_frequency: ServiceFrequency,
    pub frequency_value: FrequencyValue,
    pub created_at: i64,
    pub created_by: String,
}
