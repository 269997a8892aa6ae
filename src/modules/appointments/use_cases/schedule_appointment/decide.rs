use crate::modules::appointments::core::{
    events::{AppointmentEvent, v1::appointment_scheduled::AppointmentScheduledV1},
    state::AppointmentState,
};
use crate::modules::appointments::use_cases::schedule_appointment::{
    command::ScheduleAppointment,
    decision::{DecideError, Decision},
};

pub fn decide_schedule(state: &AppointmentState, command: ScheduleAppointment) -> Decision {
    match state {
        AppointmentState::None => {
            if command.end_date <= command.start_date {
                return Decision::Rejected {
                    reason: DecideError::InvalidInterval,
                };
            }
            Decision::Accepted {
                events: vec![AppointmentEvent::AppointmentScheduledV1(
                    AppointmentScheduledV1 {
                        appointment_id: command.appointment_id,
                        client_id: command.client_id,
                        contract_id: command.contract_id,
                        start_date: command.start_date,
                        end_date: command.end_date,
                        created_at: command.created_at,
                        created_by: command.created_by,
                    },
                )],
            }
        }
        AppointmentState::Booked { .. } => Decision::Rejected {
            reason: DecideError::AlreadyExists,
        },
    }
}
