use crate::modules::appointments::core::status::AppointmentStatus;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct AppointmentStatusChangedV1 {
    pub appointment_id: String,
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
    pub changed_at: i64,
    pub changed_by: String,
}
