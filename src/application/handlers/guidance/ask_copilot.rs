//! AskCopilotHandler - stateless copilot reply for a known risk tier.
//!
//! The tier arrives as a wire label from a client that already holds its
//! result. Unknown labels are rejected rather than treated as Low.

use std::time::Duration;
use tokio::time::sleep;

use crate::domain::guidance::{GuidanceMessage, GuidanceTemplater};

use super::super::ScreeningError;

/// Command carrying the user's question and their tier label.
#[derive(Debug, Clone)]
pub struct AskCopilotCommand {
    pub message: Option<String>,
    pub risk: String,
}

#[derive(Debug, Clone, Default)]
pub struct AskCopilotHandler {
    /// Simulated thinking time before replying.
    delay: Duration,
}

impl AskCopilotHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn handle(&self, cmd: AskCopilotCommand) -> Result<GuidanceMessage, ScreeningError> {
        let reply = GuidanceTemplater::respond_to_label(&cmd.risk, cmd.message.as_deref())
            .map_err(|e| {
                tracing::warn!(risk = %cmd.risk, error = %e, "Copilot request rejected");
                ScreeningError::from(e)
            })?;

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        tracing::debug!(risk = %cmd.risk, echoed = reply.echo.is_some(), "Copilot replied");
        Ok(reply)
    }
}
