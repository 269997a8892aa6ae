#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleAppointment {
    pub appointment_id: String,
    pub client_id: String,
    pub contract_id: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
    pub created_at: i64,
    pub created_by: String,
}
