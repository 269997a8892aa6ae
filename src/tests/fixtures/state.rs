use crate::modules::appointments::core::evolve::evolve as evolve_appointment;
use crate::modules::appointments::core::state::AppointmentState;
use crate::modules::appointments::use_cases::schedule_appointment::command::ScheduleAppointment;
use crate::modules::appointments::use_cases::schedule_appointment::decide::decide_schedule;
use crate::modules::appointments::use_cases::schedule_appointment::decision::Decision as ScheduleDecision;
use crate::modules::service_contracts::core::evolve::evolve as evolve_contract;
use crate::modules::service_contracts::core::frequency::ServiceFrequency;
use crate::modules::service_contracts::core::state::ServiceContractState;
use crate::modules::service_contracts::use_cases::create_service_contract::command::CreateServiceContract;
use crate::modules::service_contracts::use_cases::create_service_contract::decide::decide_create;
use crate::modules::service_contracts::use_cases::create_service_contract::decision::Decision as CreateDecision;
use crate::modules::service_contracts::use_cases::list_service_contracts::projection::ServiceContractRow;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    AppState::in_memory("service-contracts")
}

pub fn make_service_contract_row(
    contract_id: &str,
    client_id: &str,
    next_service_date: Option<i64>,
) -> ServiceContractRow {
    ServiceContractRow {
        contract_id: contract_id.to_string(),
        client_id: client_id.to_string(),
        title: "Monthly lawn care".to_string(),
        service_frequency: ServiceFrequency::Monthly,
        frequency_value: 1,
        last_service_date: None,
        next_service_date,
        created_at: 1_700_000_000_000,
        created_by: "user-fixed-0001".to_string(),
        updated_at: 1_700_000_000_000,
        updated_by: "user-fixed-0001".to_string(),
        last_event_id: None,
    }
}

/// State after the contract described by `command` was created.
pub fn contract_state_with(command: CreateServiceContract) -> ServiceContractState {
    match decide_create(&ServiceContractState::None, command) {
        CreateDecision::Accepted { events, .. } => events
            .into_iter()
            .fold(ServiceContractState::None, evolve_contract),
        CreateDecision::Rejected { reason } => panic!("fixture command rejected: {reason}"),
    }
}

/// State after the appointment described by `command` was scheduled.
pub fn appointment_state_with(command: ScheduleAppointment) -> AppointmentState {
    match decide_schedule(&AppointmentState::None, command) {
        ScheduleDecision::Accepted { events } => events
            .into_iter()
            .fold(AppointmentState::None, evolve_appointment),
        ScheduleDecision::Rejected { reason } => panic!("fixture command rejected: {reason}"),
    }
}
