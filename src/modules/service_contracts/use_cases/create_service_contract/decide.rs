use crate::modules::service_contracts::core::{
    events::{ServiceContractEvent, v1::service_contract_created::ServiceContractCreatedV1},
    intents::ServiceContractIntent,
    state::ServiceContractState,
};
use crate::modules::service_contracts::use_cases::create_service_contract::{
    command::CreateServiceContract,
    decision::{DecideError, Decision},
};

pub fn decide_create(state: &ServiceContractState, command: CreateServiceContract) -> Decision {
    match state {
        ServiceContractState::None => {
            let title = command.title.trim();
            if title.is_empty() {
                return Decision::Rejected {
                    reason: DecideError::BlankTitle,
                };
            }
            let payload = ServiceContractCreatedV1 {
                contract_id: command.contract_id,
                client_id: command.client_id,
                title: title.to_string(),
                service_frequency: command.service_frequency,
                frequency_value: command.frequency_value,
                created_at: command.created_at,
                created_by: command.created_by,
            };
            Decision::Accepted {
                events: vec![ServiceContractEvent::ServiceContractCreatedV1(payload.clone())],
                intents: vec![ServiceContractIntent::PublishServiceContractCreated { payload }],
            }
        }
        ServiceContractState::Active { .. } => Decision::Rejected {
            reason: DecideError::AlreadyExists,
        },
    }
}
