use crate::modules::appointments::core::events::v1::appointment_scheduled::AppointmentScheduledV1;
use crate::tests::fixtures::commands::schedule_appointment::ScheduleAppointmentBuilder;

pub fn make_appointment_scheduled_v1_event() -> AppointmentScheduledV1 {
    let command = ScheduleAppointmentBuilder::new().build();
    AppointmentScheduledV1 {
        appointment_id: command.appointment_id,
        client_id: command.client_id,
        contract_id: command.contract_id,
        start_date: command.start_date,
        end_date: command.end_date,
        created_at: command.created_at,
        created_by: command.created_by,
    }
}
