/// A completed visit overwrote the contract's last and next service dates.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ServiceVisitRecordedV1 {
    pub contract_id: String,
    pub appointment_id: String,
    pub last_service_date: i64,
    pub next_service_date: i64,
    pub recorded_at: i64,
    pub recorded_by: String,
}
