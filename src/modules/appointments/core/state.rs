use crate::modules::appointments::core::status::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentState {
    None,
    Booked {
        appointment_id: String,
        client_id: String,
        contract_id: Option<String>,
        start_date: i64,
        end_date: i64,
        status: AppointmentStatus,
        created_at: i64,
        created_by: String,
        updated_at: i64,
        updated_by: String,
    },
}
