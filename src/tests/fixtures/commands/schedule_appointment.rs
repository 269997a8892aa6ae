use crate::modules::appointments::use_cases::schedule_appointment::command::ScheduleAppointment;

// 2024-01-15T10:00:00Z
const START_DATE: i64 = 1_705_312_800_000;
const TWO_HOURS: i64 = 7_200_000;

pub struct ScheduleAppointmentBuilder {
    inner: ScheduleAppointment,
}

impl Default for ScheduleAppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ScheduleAppointmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: ScheduleAppointment {
                appointment_id: "appt-fixed-0001".to_string(),
                client_id: "client-fixed-0001".to_string(),
                contract_id: Some("sc-fixed-0001".to_string()),
                start_date: START_DATE,
                end_date: START_DATE + TWO_HOURS,
                created_at: 1_700_000_000_000,
                created_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn appointment_id(mut self, v: impl Into<String>) -> Self {
        self.inner.appointment_id = v.into();
        self
    }

    pub fn client_id(mut self, v: impl Into<String>) -> Self {
        self.inner.client_id = v.into();
        self
    }

    pub fn contract_id(mut self, v: Option<String>) -> Self {
        self.inner.contract_id = v;
        self
    }

    /// Moves the whole slot, keeping its length.
    pub fn start_date(mut self, v: i64) -> Self {
        let length = self.inner.end_date - self.inner.start_date;
        self.inner.start_date = v;
        self.inner.end_date = v + length;
        self
    }

    pub fn end_date(mut self, v: i64) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn build(self) -> ScheduleAppointment {
        self.inner
    }
}
