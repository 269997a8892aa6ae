use crate::modules::service_contracts::core::frequency::{FrequencyValue, ServiceFrequency};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceContractState {
    None,
    Active {
        contract_id: String,
        client_id: String,
        title: String,
        service_frequency: ServiceFrequency,
        frequency_value: FrequencyValue,
        last_service_date: Option<i64>,
        next_service_date: Option<i64>,
        last_appointment_id: Option<String>,
        created_at: i64,
        created_by: String,
        updated_at: i64,
        updated_by: String,
    },
}
