use crate::modules::appointments::core::{
    events::{AppointmentEvent, v1::appointment_status_changed::AppointmentStatusChangedV1},
    state::AppointmentState,
    status::AppointmentStatus,
};
use crate::modules::appointments::use_cases::change_appointment_status::{
    command::ChangeAppointmentStatus,
    decision::{ContractVisitCompleted, DecideError, Decision},
};

pub fn decide_change_status(state: &AppointmentState, command: ChangeAppointmentStatus) -> Decision {
    let AppointmentState::Booked {
        appointment_id,
        contract_id,
        start_date,
        status,
        ..
    } = state
    else {
        return Decision::Rejected {
            reason: DecideError::NotFound,
        };
    };

    if !status.can_transition_to(command.status) {
        return Decision::Rejected {
            reason: DecideError::InvalidTransition {
                from: *status,
                to: command.status,
            },
        };
    }

    let completed_visit = match (command.status, contract_id) {
        (AppointmentStatus::Completed, Some(contract_id)) => Some(ContractVisitCompleted {
            contract_id: contract_id.clone(),
            appointment_id: appointment_id.clone(),
            start_date: *start_date,
        }),
        _ => None,
    };

    Decision::Accepted {
        events: vec![AppointmentEvent::AppointmentStatusChangedV1(
            AppointmentStatusChangedV1 {
                appointment_id: appointment_id.clone(),
                from: *status,
                to: command.status,
                changed_at: command.changed_at,
                changed_by: command.changed_by,
            },
        )],
        completed_visit,
    }
}
