//! Screening configuration: simulated latencies for the mock collaborators.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreeningConfig {
    /// Delay before the image classifier answers
    #[serde(default)]
    pub image_delay_ms: u64,

    /// Delay before the copilot answers
    #[serde(default)]
    pub copilot_delay_ms: u64,
}

impl ScreeningConfig {
    pub fn image_delay(&self) -> Duration {
        Duration::from_millis(self.image_delay_ms)
    }

    pub fn copilot_delay(&self) -> Duration {
        Duration::from_millis(self.copilot_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.image_delay_ms > MAX_DELAY_MS {
            return Err(ValidationError::DelayTooLong("image_delay_ms"));
        }
        if self.copilot_delay_ms > MAX_DELAY_MS {
            return Err(ValidationError::DelayTooLong("copilot_delay_ms"));
        }
        Ok(())
    }
}
