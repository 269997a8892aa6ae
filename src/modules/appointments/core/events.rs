pub mod v1 {
    pub mod appointment_scheduled;
    pub mod appointment_status_changed;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AppointmentEvent {
    AppointmentScheduledV1(v1::appointment_scheduled::AppointmentScheduledV1),
    AppointmentStatusChangedV1(v1::appointment_status_changed::AppointmentStatusChangedV1),
}

pub fn appointment_stream_id(appointment_id: &str) -> String {
    format!("Appointment-{appointment_id}")
}
