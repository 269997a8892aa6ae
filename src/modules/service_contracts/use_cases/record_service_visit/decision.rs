use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::core::intents::ServiceContractIntent;
use crate::modules::service_contracts::core::next_service_date::ProjectionError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("service contract not found")]
    ContractNotFound,

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoRecurrence,
    AlreadyRecorded,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoRecurrence => "no_recurrence",
            Self::AlreadyRecorded => "already_recorded",
        }
    }
}

pub enum Decision {
    Accepted {
        events: Vec<ServiceContractEvent>,
        intents: Vec<ServiceContractIntent>,
        next_service_date: i64,
    },
    Skipped {
        reason: SkipReason,
    },
    Rejected {
        reason: DecideError,
    },
}
