//! Request and response types for the stateless copilot endpoint.
//!
//! The wire shape matches the results page chat panel, hence the one
//! camelCase field.

use serde::{Deserialize, Serialize};

use crate::domain::guidance::GuidanceMessage;

/// Body of `POST /api/copilot`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CopilotRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopilotSections {
    pub detected: String,
    pub meaning: String,
    pub todo: Vec<String>,
    #[serde(rename = "whenToAct")]
    pub when_to_act: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopilotResponse {
    pub sections: CopilotSections,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub echo: Option<String>,
}

impl From<GuidanceMessage> for CopilotResponse {
    fn from(message: GuidanceMessage) -> Self {
        Self {
            sections: CopilotSections {
                detected: message.detected,
                meaning: message.meaning,
                todo: message.todo,
                when_to_act: message.when_to_act,
            },
            echo: message.echo,
        }
    }
}
