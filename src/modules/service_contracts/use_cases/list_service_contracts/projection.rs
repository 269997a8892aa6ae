use crate::modules::service_contracts::core::frequency::ServiceFrequency;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceContractRow {
    pub contract_id: String,
    pub client_id: String,
    pub title: String,
    pub service_frequency: ServiceFrequency,
    pub frequency_value: u32,
    pub last_service_date: Option<i64>,
    pub next_service_date: Option<i64>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceContractView {
    pub contract_id: String,
    pub client_id: String,
    pub title: String,
    pub service_frequency: ServiceFrequency,
    pub frequency_value: u32,
    pub last_service_date: Option<i64>,
    pub next_service_date: Option<i64>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl From<ServiceContractRow> for ServiceContractView {
    fn from(row: ServiceContractRow) -> Self {
        Self {
            contract_id: row.contract_id,
            client_id: row.client_id,
            title: row.title,
            service_frequency: row.service_frequency,
            frequency_value: row.frequency_value,
            last_service_date: row.last_service_date,
            next_service_date: row.next_service_date,
            created_at: row.created_at,
            created_by: row.created_by,
            updated_at: row.updated_at,
            updated_by: row.updated_by,
        }
    }
}
