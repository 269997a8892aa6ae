use crate::modules::appointments::core::events::AppointmentEvent;
use crate::modules::appointments::core::state::AppointmentState;
use crate::modules::appointments::core::status::AppointmentStatus;

pub fn evolve(state: AppointmentState, event: AppointmentEvent) -> AppointmentState {
    match (state, event) {
        (AppointmentState::None, AppointmentEvent::AppointmentScheduledV1(e)) => {
            AppointmentState::Booked {
                appointment_id: e.appointment_id,
                client_id: e.client_id,
                contract_id: e.contract_id,
                start_date: e.start_date,
                end_date: e.end_date,
                status: AppointmentStatus::Scheduled,
                created_at: e.created_at,
                created_by: e.created_by.clone(),
                updated_at: e.created_at,
                updated_by: e.created_by,
            }
        }
        (
            AppointmentState::Booked {
                appointment_id,
                client_id,
                contract_id,
                start_date,
                end_date,
                created_at,
                created_by,
                ..
            },
            AppointmentEvent::AppointmentStatusChangedV1(e),
        ) => AppointmentState::Booked {
            appointment_id,
            client_id,
            contract_id,
            start_date,
            end_date,
            status: e.to,
            created_at,
            created_by,
            updated_at: e.changed_at,
            updated_by: e.changed_by,
        },
        (state, _) => state,
    }
}
