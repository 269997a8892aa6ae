/// Records a completed visit against a contract. `base_date` is the completed appointment's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordServiceVisit {
    pub contract_id: String,
    pub appointment_id: String,
    pub base_date: i64,
    pub recorded_at: i64,
    pub recorded_by: String,
}
