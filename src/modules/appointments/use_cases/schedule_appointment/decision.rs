use crate::modules::appointments::core::events::AppointmentEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("appointment already exists")]
    AlreadyExists,

    #[error("end date must be after start date")]
    InvalidInterval,
}

pub enum Decision {
    Accepted { events: Vec<AppointmentEvent> },
    Rejected { reason: DecideError },
}
