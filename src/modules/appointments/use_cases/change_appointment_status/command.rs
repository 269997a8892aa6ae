use crate::modules::appointments::core::status::AppointmentStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAppointmentStatus {
    pub appointment_id: String,
    pub status: AppointmentStatus,
    pub changed_at: i64,
    pub changed_by: String,
}
