// Shared test fixture for the CreateServiceContract command, seeded from
// json/create_service_contract.json.

use crate::modules::service_contracts::core::frequency::{FrequencyValue, ServiceFrequency};
use crate::modules::service_contracts::use_cases::create_service_contract::command::CreateServiceContract;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceContractDto {
    pub contract_id: String,
    pub client_id: String,
    pub title: String,
    pub service_frequency: ServiceFrequency,
    pub frequency_value: FrequencyValue,
}

pub struct CreateServiceContractBuilder {
    inner: CreateServiceContract,
}

impl Default for CreateServiceContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateServiceContractBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/src/tests/fixtures/commands/json/create_service_contract.json"
        ))
        .unwrap();
        let dto: CreateServiceContractDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateServiceContract {
                contract_id: dto.contract_id,
                client_id: dto.client_id,
                title: dto.title,
                service_frequency: dto.service_frequency,
                frequency_value: dto.frequency_value,
                created_at: 1_700_000_000_000,
                created_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn contract_id(mut self, v: impl Into<String>) -> Self {
        self.inner.contract_id = v.into();
        self
    }

    pub fn client_id(mut self, v: impl Into<String>) -> Self {
        self.inner.client_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn service_frequency(mut self, v: ServiceFrequency) -> Self {
        self.inner.service_frequency = v;
        self
    }

    /// Panics on a non-positive value; builders only model valid commands.
    pub fn frequency_value(mut self, v: i64) -> Self {
        self.inner.frequency_value = FrequencyValue::try_from(v).unwrap();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> CreateServiceContract {
        self.inner
    }
}
