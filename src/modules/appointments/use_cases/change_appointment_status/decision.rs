use crate::modules::appointments::core::events::AppointmentEvent;
use crate::modules::appointments::core::status::AppointmentStatus;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("appointment not found")]
    NotFound,

    #[error("appointment cannot move from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

/// A completed appointment that belongs to a service contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractVisitCompleted {
    pub contract_id: String,
    pub appointment_id: String,
    pub start_date: i64,
}

pub enum Decision {
    Accepted {
        events: Vec<AppointmentEvent>,
        completed_visit: Option<ContractVisitCompleted>,
    },
    Rejected {
        reason: DecideError,
    },
}
