pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod service_contracts {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod frequency;
            pub mod intents;
            pub mod next_service_date;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod create_service_contract {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod record_service_visit {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
            pub mod list_service_contracts {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod preview_next_service_date {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
    pub mod appointments {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod state;
            pub mod status;
        }
        pub mod use_cases {
            pub mod schedule_appointment {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod change_appointment_status {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
