use crate::modules::appointments::core::events::appointment_stream_id;
use crate::modules::appointments::use_cases::change_appointment_status::command::ChangeAppointmentStatus;
use crate::modules::appointments::core::status::AppointmentStatus;
use crate::modules::service_contracts::core::events::contract_stream_id;
use crate::modules::service_contracts::core::frequency::ServiceFrequency;
use crate::modules::service_contracts::use_cases::record_service_visit::handler::RecordOutcome;
use crate::tests::fixtures::commands::create_service_contract::CreateServiceContractBuilder;
use crate::tests::fixtures::commands::schedule_appointment::ScheduleAppointmentBuilder;
use crate::tests::fixtures::state::make_test_state;

// 2024-01-15T10:00:00Z
const JAN_15_2024: i64 = 1_705_312_800_000;

#[tokio::test]
async fn lists_service_contracts_by_client_ordered_by_next_service_date() {
    let state = make_test_state();

    let contracts = [
        ("sc-weekly", ServiceFrequency::Weekly),
        ("sc-annual", ServiceFrequency::Annual),
        ("sc-monthly", ServiceFrequency::Monthly),
        ("sc-unvisited", ServiceFrequency::Quarterly),
    ];
    for (contract_id, frequency) in contracts {
        let stream_id = contract_stream_id(contract_id);
        state
            .create_contract_handler
            .handle(
                &stream_id,
                CreateServiceContractBuilder::new()
                    .contract_id(contract_id)
                    .service_frequency(frequency)
                    .build(),
            )
            .await
            .unwrap();
        state.project_contract_stream(&stream_id).await.unwrap();
    }

    for contract_id in ["sc-weekly", "sc-annual", "sc-monthly"] {
        let appointment_id = format!("appt-{contract_id}");
        let stream_id = appointment_stream_id(&appointment_id);
        state
            .schedule_appointment_handler
            .handle(
                &stream_id,
                ScheduleAppointmentBuilder::new()
                    .appointment_id(appointment_id.clone())
                    .contract_id(Some(contract_id.to_string()))
                    .start_date(JAN_15_2024)
                    .build(),
            )
            .await
            .unwrap();
        let changed = state
            .change_status_handler
            .handle(
                &stream_id,
                ChangeAppointmentStatus {
                    appointment_id,
                    status: AppointmentStatus::Completed,
                    changed_at: JAN_15_2024 + 7_200_000,
                    changed_by: "tech-fixed-0001".into(),
                },
            )
            .await
            .unwrap();
        let Some(RecordOutcome::Recorded { stream_id, .. }) = changed.service_visit else {
            panic!("expected the visit to be recorded for {contract_id}");
        };
        state.project_contract_stream(&stream_id).await.unwrap();
    }

    let ascending = state
        .contract_queries
        .list_by_client_id("client-fixed-0001", 0, 10, false)
        .await
        .unwrap();
    let ids: Vec<_> = ascending.iter().map(|c| c.contract_id.as_str()).collect();
    assert_eq!(ids, ["sc-weekly", "sc-monthly", "sc-annual", "sc-unvisited"]);
    assert!(ascending.iter().take(3).all(|c| c.last_service_date == Some(JAN_15_2024)));

    let descending = state
        .contract_queries
        .list_by_client_id("client-fixed-0001", 0, 2, true)
        .await
        .unwrap();
    let ids: Vec<_> = descending.iter().map(|c| c.contract_id.as_str()).collect();
    assert_eq!(ids, ["sc-annual", "sc-monthly"]);
}
