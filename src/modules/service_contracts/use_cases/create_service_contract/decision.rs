use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::core::intents::ServiceContractIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("service contract already exists")]
    AlreadyExists,

    #[error("service contract title must not be blank")]
    BlankTitle,
}

pub enum Decision {
    Accepted {
        events: Vec<ServiceContractEvent>,
        intents: Vec<ServiceContractIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
