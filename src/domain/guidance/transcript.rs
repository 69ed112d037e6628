//! Transcript - append-only copilot conversation history.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::errors::GuidanceError;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceTurn {
    pub role: Role,
    pub text: String,
    pub at: Timestamp,
}

/// Ordered conversation history. Turns are never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<GuidanceTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user question, trimmed.
    ///
    /// # Errors
    ///
    /// - `EmptyMessage` if nothing remains after trimming
    pub fn push_user(&mut self, text: &str) -> Result<&GuidanceTurn, GuidanceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GuidanceError::EmptyMessage);
        }
        Ok(self.push(Role::User, trimmed.to_string()))
    }

    /// Appends an assistant reply verbatim.
    pub fn push_assistant(&mut self, text: impl Into<String>) -> &GuidanceTurn {
        self.push(Role::Assistant, text.into())
    }

    pub fn turns(&self) -> &[GuidanceTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&GuidanceTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    fn push(&mut self, role: Role, text: String) -> &GuidanceTurn {
        self.turns.push(GuidanceTurn {
            role,
            text,
            at: Timestamp::now(),
        });
        &self.turns[self.turns.len() - 1]
    }
}
