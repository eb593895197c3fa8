//! Mock backend simulation settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_LATENCY_MS: u64 = 10_000;

/// Behaviour of the mock auth backend and survey provider
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Simulated login/register round trip
    #[serde(default = "default_auth_latency")]
    pub auth_latency_ms: u64,

    /// Simulated survey API round trip
    #[serde(default = "default_survey_latency")]
    pub survey_latency_ms: u64,

    /// Derive partner scores when no partner has answered
    #[serde(default = "default_demo_partner")]
    pub demo_partner: bool,
}

impl SimulationConfig {
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn survey_latency(&self) -> Duration {
        Duration::from_millis(self.survey_latency_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.auth_latency_ms > MAX_LATENCY_MS || self.survey_latency_ms > MAX_LATENCY_MS {
            return Err(ValidationError::LatencyTooLarge);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            auth_latency_ms: default_auth_latency(),
            survey_latency_ms: default_survey_latency(),
            demo_partner: default_demo_partner(),
        }
    }
}

fn default_auth_latency() -> u64 {
    1000
}

fn default_survey_latency() -> u64 {
    500
}

fn default_demo_partner() -> bool {
    true
}
