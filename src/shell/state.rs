use crate::modules::appointments::core::events::AppointmentEvent;
use crate::modules::appointments::use_cases::change_appointment_status::handler::ChangeAppointmentStatusHandler;
use crate::modules::appointments::use_cases::schedule_appointment::handler::ScheduleAppointmentHandler;
use crate::modules::service_contracts::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::service_contracts::core::events::ServiceContractEvent;
use crate::modules::service_contracts::use_cases::create_service_contract::handler::CreateServiceContractHandler;
use crate::modules::service_contracts::use_cases::list_service_contracts::handler::Projector;
use crate::modules::service_contracts::use_cases::list_service_contracts::queries_port::ServiceContractQueries;
use crate::modules::service_contracts::use_cases::record_service_visit::handler::RecordServiceVisitHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

type ContractStore = InMemoryEventStore<ServiceContractEvent>;
type AppointmentStore = InMemoryEventStore<AppointmentEvent>;

pub const PROJECTOR_NAME: &str = "service_contract_summary";

#[derive(Clone)]
pub struct AppState {
    pub contract_queries: Arc<dyn ServiceContractQueries + Send + Sync>,
    pub projections: Arc<InMemoryProjections>,
    pub create_contract_handler: Arc<CreateServiceContractHandler<ContractStore, InMemoryDomainOutbox>>,
    pub schedule_appointment_handler: Arc<ScheduleAppointmentHandler<AppointmentStore>>,
    pub change_status_handler:
        Arc<ChangeAppointmentStatusHandler<AppointmentStore, ContractStore, InMemoryDomainOutbox>>,
    pub contract_event_store: Arc<ContractStore>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
}

impl AppState {
    pub fn in_memory(topic: &str) -> Self {
        Self::wire(
            topic,
            ContractStore::new(),
            AppointmentStore::new(),
            InMemoryDomainOutbox::new(),
        )
    }

    pub fn wire(
        topic: &str,
        contract_store: ContractStore,
        appointment_store: AppointmentStore,
        outbox: InMemoryDomainOutbox,
    ) -> Self {
        let contract_event_store = Arc::new(contract_store);
        let appointment_store = Arc::new(appointment_store);
        let outbox = Arc::new(outbox);
        let projections = Arc::new(InMemoryProjections::new());

        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        let create_contract_handler = Arc::new(CreateServiceContractHandler::new(
            topic,
            contract_event_store.clone(),
            outbox.clone(),
        ));
        let record_visit = Arc::new(RecordServiceVisitHandler::new(
            topic,
            contract_event_store.clone(),
            outbox.clone(),
        ));
        let schedule_appointment_handler =
            Arc::new(ScheduleAppointmentHandler::new(appointment_store.clone()));
        let change_status_handler = Arc::new(ChangeAppointmentStatusHandler::new(
            appointment_store,
            record_visit,
        ));

        Self {
            contract_queries: projections.clone(),
            projections,
            create_contract_handler,
            schedule_appointment_handler,
            change_status_handler,
            contract_event_store,
            outbox,
            projector,
        }
    }

    /// Applies the newest event of a contract stream to the read model.
    pub async fn project_contract_stream(&self, stream_id: &str) -> anyhow::Result<()> {
        let stream = self.contract_event_store.load(stream_id).await?;
        let Some(event) = stream.events.last() else {
            anyhow::bail!("stream {stream_id} has no events to project");
        };
        self.projector
            .apply_one(stream_id, stream.version, event)
            .await
    }
}
