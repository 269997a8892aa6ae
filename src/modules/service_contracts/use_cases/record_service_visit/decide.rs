use crate::modules::service_contracts::core::{
    events::{ServiceContractEvent, v1::service_visit_recorded::ServiceVisitRecordedV1},
    intents::ServiceContractIntent,
    next_service_date::{NextServiceDate, ProjectionError, project},
    state::ServiceContractState,
};
use crate::modules::service_contracts::use_cases::record_service_visit::{
    command::RecordServiceVisit,
    decision::{DecideError, Decision, SkipReason},
};
use crate::shared::core::primitives::{datetime_from_millis, millis_from_datetime};

pub fn decide_record_visit(state: &ServiceContractState, command: RecordServiceVisit) -> Decision {
    let ServiceContractState::Active {
        contract_id,
        service_frequency,
        frequency_value,
        last_appointment_id,
        ..
    } = state
    else {
        return Decision::Rejected {
            reason: DecideError::ContractNotFound,
        };
    };

    if last_appointment_id.as_deref() == Some(command.appointment_id.as_str()) {
        return Decision::Skipped {
            reason: SkipReason::AlreadyRecorded,
        };
    }

    let projection = datetime_from_millis(command.base_date)
        .map_err(ProjectionError::from)
        .and_then(|base_date| project(base_date, *service_frequency, *frequency_value));

    let next_service_date = match projection {
        Ok(NextServiceDate::Recurs(date)) => millis_from_datetime(date),
        // A typed frequency never projects to `Unsupported`; only untyped tags do.
        Ok(NextServiceDate::NoRecurrence | NextServiceDate::Unsupported { .. }) => {
            return Decision::Skipped {
                reason: SkipReason::NoRecurrence,
            };
        }
        Err(e) => {
            return Decision::Rejected {
                reason: DecideError::Projection(e),
            };
        }
    };

    let payload = ServiceVisitRecordedV1 {
        contract_id: contract_id.clone(),
        appointment_id: command.appointment_id,
        last_service_date: command.base_date,
        next_service_date,
        recorded_at: command.recorded_at,
        recorded_by: command.recorded_by,
    };
    Decision::Accepted {
        events: vec![ServiceContractEvent::ServiceVisitRecordedV1(payload.clone())],
        intents: vec![ServiceContractIntent::PublishServiceVisitRecorded { payload }],
        next_service_date,
    }
}
